//! Domain Entities
//!
//! - `OptionNode` - A leaf value or a named group in an option tree
//! - `OptionGroup` - A named, possibly disabled, container of nodes

mod option_node;

pub use option_node::{copy_group, is_group, OptionGroup, OptionNode};
