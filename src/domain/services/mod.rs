//! Domain Services
//!
//! Pure functions over option trees. None of them do I/O or mutate the tree
//! they are given.

mod filter;
#[cfg(test)]
mod fixtures;
mod indexer;
mod matching;
mod navigation;
mod walk;

pub use filter::filter_options;
pub use indexer::{
    count_options, index_of_option, locate_option, node_at_path, option_at_index, path_for_option,
};
pub use matching::{
    default_matcher, default_type_ahead_matcher, strip_diacritics, Matcher, SearchText,
};
pub use navigation::{advance_selectable_option, find_option_with_offset};
