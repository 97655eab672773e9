#![no_main]

use libfuzzer_sys::fuzz_target;
use option_tree::{
    count_options, default_matcher, filter_options, index_of_option, option_at_index, parse_tree,
    path_for_option,
};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tree) = parse_tree(s) else {
        return;
    };

    // Every flat index must resolve and point back to a leaf with a path
    let count = count_options(&tree);
    for index in 0..count.min(256) {
        let option = option_at_index(&tree, index).option;
        assert!(option.is_some());
        assert!(index_of_option(&tree, option).is_some());
        assert!(!path_for_option(&tree, option).is_empty());
    }
    assert!(option_at_index(&tree, count).is_absent());

    // Filtering with an empty search is lossless for leaves
    let filtered = filter_options(&tree, "", default_matcher::<serde_json::Value>, false);
    assert_eq!(count_options(&filtered), count);
});
