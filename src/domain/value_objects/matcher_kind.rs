//! Matcher Kind Value Object
//!
//! Names one of the built-in matchers so it can be picked from configuration.

use serde::{Deserialize, Serialize};

/// Built-in matcher selection
///
/// - `Contains`: leaf text contains the search text anywhere (default)
/// - `TypeAhead`: leaf text starts with the search text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// Match anywhere in the text (default)
    #[default]
    Contains,
    /// Match at the start of the text
    TypeAhead,
}

impl MatcherKind {
    /// Parse a loosely written matcher name, as found in environment variables.
    pub fn parse_loose(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "contains" => Some(MatcherKind::Contains),
            "type_ahead" | "typeahead" | "prefix" => Some(MatcherKind::TypeAhead),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherKind::Contains => write!(f, "contains"),
            MatcherKind::TypeAhead => write!(f, "type_ahead"),
        }
    }
}
