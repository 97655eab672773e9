//! option-tree - navigation, indexing and filtering for nested option lists
//!
//! An option tree is an ordered list whose entries are either leaf values or
//! named groups of further entries. Selection widgets use it to show nested
//! choices, map a flat row number to a place in the tree, cascade a group's
//! disabled flag to everything inside it, and narrow the list by a search
//! term without losing its grouping.
//!
//! ```
//! use option_tree::{filter_options, index_of_option, parse_tree, path_for_option};
//! use serde_json::json;
//!
//! let tree = parse_tree(r#"[
//!     { "groupName": "Smalls", "options": ["zero", "one"] },
//!     "one hundred"
//! ]"#).unwrap();
//!
//! assert_eq!(index_of_option(&tree, Some(&json!("one hundred"))), Some(2));
//! assert_eq!(path_for_option(&tree, Some(&json!("one"))), "0.1");
//!
//! let hits = filter_options(&tree, "hun", option_tree::default_matcher::<serde_json::Value>, false);
//! assert_eq!(hits.len(), 1);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{filter_with_config, find_with_config, load_tree, parse_tree};
pub use config::{Config, ConfigWarning, SearchConfig};
pub use domain::entities::{copy_group, is_group, OptionGroup, OptionNode};
pub use domain::policies::{resolve_disabled, Disableable, DisabledState};
pub use domain::services::{
    advance_selectable_option, count_options, default_matcher, default_type_ahead_matcher,
    filter_options, find_option_with_offset, index_of_option, locate_option, node_at_path,
    option_at_index, path_for_option, strip_diacritics, Matcher, SearchText,
};
pub use domain::value_objects::{MatcherKind, OptionPath, ResolvedOption};
pub use error::{OptionTreeError, OptionTreeResult};
