#![no_main]

use libfuzzer_sys::fuzz_target;
use option_tree::{default_type_ahead_matcher, strip_diacritics};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = strip_diacritics(s);
        assert_eq!(strip_diacritics(&once), once);
        let _ = default_type_ahead_matcher(s, s);
    }
});
