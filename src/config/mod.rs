//! Configuration for search and filtering
//!
//! Settings resolve in this order:
//! 1. Environment variables (OPTION_TREE_*)
//! 2. A TOML config file with a `[search]` table
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, MatcherKind};

pub use loader::{apply_overrides, ENV_MATCHER, ENV_SEARCH_FIELD, ENV_SKIP_DISABLED};
pub use types::{Config, SearchConfig};
