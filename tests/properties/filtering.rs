//! Property tests for filtering, disabled inheritance and group copies.

use proptest::prelude::*;
use serde_json::Value;

use option_tree::{
    copy_group, count_options, default_matcher, filter_options, option_at_index, OptionNode,
};

use crate::strategies::{flatten, json_tree, shapes, string_tree};

fn contains(value: &String, search_text: &str) -> i32 {
    default_matcher(value, search_text)
}

fn accept_all(_: &Value, _: &str) -> i32 {
    0
}

fn has_empty_group<T>(tree: &[OptionNode<T>]) -> bool {
    tree.iter().any(|node| match node {
        OptionNode::Leaf(_) => false,
        OptionNode::Group(group) => group.options.is_empty() || has_empty_group(&group.options),
    })
}

fn groups<T>(tree: &[OptionNode<T>]) -> Vec<&option_tree::OptionGroup<T>> {
    let mut found = Vec::new();
    for node in tree {
        if let OptionNode::Group(group) = node {
            found.push(group);
            found.extend(groups(&group.options));
        }
    }
    found
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: filtering keeps exactly the matching leaves, in order.
    #[test]
    fn property_filter_keeps_matching_leaves_in_order(
        shapes in shapes(),
        search in "[0-9]{0,2}"
    ) {
        let tree = string_tree(&shapes);
        let filtered = filter_options(&tree, &search, contains, false);

        let expected: Vec<String> = flatten(&tree)
            .into_iter()
            .filter(|leaf| leaf.contains(search.as_str()))
            .collect();
        prop_assert_eq!(flatten(&filtered), expected);
    }

    /// PROPERTY: filtered trees never contain empty groups.
    #[test]
    fn property_filter_drops_empty_groups(
        shapes in shapes(),
        search in "[0-9]{0,2}"
    ) {
        let tree = string_tree(&shapes);
        prop_assert!(!has_empty_group(&filter_options(&tree, &search, contains, false)));
    }

    /// PROPERTY: filtering an already filtered tree changes nothing.
    #[test]
    fn property_filter_is_idempotent(
        shapes in shapes(),
        search in "[0-9]{0,2}",
        skip_disabled in any::<bool>()
    ) {
        let tree = string_tree(&shapes);
        let once = filter_options(&tree, &search, contains, skip_disabled);
        let twice = filter_options(&once, &search, contains, skip_disabled);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a leaf is disabled iff it or one of its ancestor groups is.
    #[test]
    fn property_disabled_state_cascades(shapes in shapes()) {
        let (tree, expected) = json_tree(&shapes);
        prop_assert_eq!(count_options(&tree), expected.len());

        for (index, disabled) in expected.iter().enumerate() {
            prop_assert_eq!(option_at_index(&tree, index).disabled, *disabled);
        }
    }

    /// PROPERTY: skipping disabled keeps exactly the leaves that resolve as enabled.
    #[test]
    fn property_skip_disabled_keeps_enabled_leaves(shapes in shapes()) {
        let (tree, expected) = json_tree(&shapes);
        let enabled: Vec<Value> = flatten(&tree)
            .into_iter()
            .zip(expected)
            .filter(|(_, disabled)| !disabled)
            .map(|(leaf, _)| leaf)
            .collect();

        let filtered = filter_options(&tree, "", accept_all, true);
        prop_assert_eq!(flatten(&filtered), enabled);
        prop_assert!(!has_empty_group(&filtered));
    }

    /// PROPERTY: copying a group with its own options yields an equal group.
    #[test]
    fn property_copy_group_with_same_options_is_equal(shapes in shapes()) {
        let (tree, _) = json_tree(&shapes);
        for group in groups(&tree) {
            prop_assert_eq!(&copy_group(group, group.options.clone()), group);
        }
    }
}
