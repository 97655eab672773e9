//! Domain Layer
//!
//! The option tree model and everything that can be computed from it.
//!
//! ## Structure
//!
//! - `entities/` - The tree itself (OptionNode, OptionGroup)
//! - `value_objects/` - Small immutable values (OptionPath, ResolvedOption, MatcherKind)
//! - `services/` - Indexing, filtering, matching and navigation
//! - `policies/` - Disabled-state inheritance
//!
//! Nothing in this layer touches the file system.

pub mod entities;
pub mod policies;
pub mod services;
pub mod value_objects;
