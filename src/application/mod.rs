//! Application Layer
//!
//! Entry points that combine the domain services with configuration and
//! external input. Business rules stay in the domain layer.
//!
//! - `search` - Filtering and type-ahead driven by a `SearchConfig`
//! - `loading` - Option trees from JSON text or files

pub mod loading;
pub mod search;

pub use loading::{load_tree, parse_tree};
pub use search::{filter_with_config, find_with_config};
