//! Property tests for flat indices and option paths.

use proptest::prelude::*;

use option_tree::{
    count_options, index_of_option, locate_option, node_at_path, option_at_index,
    path_for_option, OptionNode, OptionPath,
};

use crate::strategies::{flatten, shapes, string_tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `count_options` equals the number of leaves a depth-first walk sees.
    #[test]
    fn property_count_matches_flattened_leaves(shapes in shapes()) {
        let tree = string_tree(&shapes);
        prop_assert_eq!(count_options(&tree), flatten(&tree).len());
    }

    /// PROPERTY: `index_of_option` and `option_at_index` are inverses on unique leaves.
    #[test]
    fn property_flat_index_round_trips(shapes in shapes()) {
        let tree = string_tree(&shapes);
        let count = count_options(&tree);

        for index in 0..count {
            let resolved = option_at_index(&tree, index);
            prop_assert!(!resolved.disabled);
            let leaf = resolved.option;
            prop_assert!(leaf.is_some());
            prop_assert_eq!(index_of_option(&tree, leaf), Some(index));
        }
        prop_assert!(option_at_index(&tree, count).is_absent());
    }

    /// PROPERTY: a leaf's dotted path parses back and addresses the same leaf.
    #[test]
    fn property_paths_address_their_leaf(shapes in shapes()) {
        let tree = string_tree(&shapes);

        for leaf in flatten(&tree) {
            let text = path_for_option(&tree, Some(&leaf));
            let path: OptionPath = text.parse().unwrap();
            let located = locate_option(&tree, Some(&leaf));
            prop_assert_eq!(Some(&path), located.as_ref());
            prop_assert_eq!(path.to_string(), text);
            prop_assert_eq!(node_at_path(&tree, &path).and_then(OptionNode::as_leaf), Some(&leaf));
        }
    }

    /// PROPERTY: leaves that are not in the tree have no index and no path.
    #[test]
    fn property_missing_leaf_has_no_position(shapes in shapes()) {
        let tree = string_tree(&shapes);
        let missing = "not an option".to_string();

        prop_assert_eq!(index_of_option(&tree, Some(&missing)), None);
        prop_assert_eq!(path_for_option(&tree, Some(&missing)), "");
    }
}
