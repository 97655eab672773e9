//! Property tests for diacritic folding and the default matchers.

use proptest::prelude::*;

use option_tree::{default_matcher, default_type_ahead_matcher, strip_diacritics};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: printable ASCII passes through unchanged.
    #[test]
    fn property_ascii_is_untouched(s in "[ -~]{0,64}") {
        prop_assert_eq!(strip_diacritics(&s), s);
    }

    /// PROPERTY: stripping is idempotent and never panics on arbitrary text.
    #[test]
    fn property_strip_is_idempotent(s in ".{0,64}") {
        let once = strip_diacritics(&s);
        prop_assert_eq!(strip_diacritics(&once), once);
    }

    /// PROPERTY: any prefix of a value type-ahead matches the value.
    #[test]
    fn property_prefix_always_type_ahead_matches(
        s in "[a-zA-Z0-9 áéíóúñçøåæÁÉÍÓÚÑÇØÅÆ]{0,16}",
        cut in 0usize..=16
    ) {
        let prefix: String = s.chars().take(cut).collect();
        prop_assert_eq!(default_type_ahead_matcher(s.as_str(), &prefix), 1);
    }

    /// PROPERTY: the containment matcher finds any ASCII substring.
    #[test]
    fn property_contains_finds_substrings(
        head in "[a-z ]{0,8}",
        needle in "[a-z]{1,4}",
        tail in "[a-z ]{0,8}"
    ) {
        let value = format!("{}{}{}", head, needle, tail);
        let position = default_matcher(value.as_str(), &needle.to_uppercase());
        prop_assert!(position >= 0);
        prop_assert!(position as usize <= head.len());
        prop_assert_eq!(default_matcher(value.as_str(), ""), 0);
    }
}
