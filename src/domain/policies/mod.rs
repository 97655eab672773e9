//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

mod disabled;

pub use disabled::{resolve_disabled, Disableable, DisabledState};
