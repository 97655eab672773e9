//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod matcher_kind;
mod option_path;
mod resolved_option;

pub use config_warning::ConfigWarning;
pub use matcher_kind::MatcherKind;
pub use option_path::OptionPath;
pub use resolved_option::ResolvedOption;
