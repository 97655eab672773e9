//! Configuration type definitions

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{Matcher, SearchText};
use crate::domain::value_objects::{ConfigWarning, MatcherKind};
use crate::error::OptionTreeResult;

use super::loader;

/// Search and filter settings
///
/// ```toml
/// [search]
/// skip_disabled = true
/// matcher = "type_ahead"
/// search_field = "label"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Drop disabled leaves and groups while filtering or searching
    #[serde(default)]
    pub skip_disabled: bool,

    /// Which built-in matcher to use
    #[serde(default)]
    pub matcher: MatcherKind,

    /// For record-like leaves, match against this field instead of the whole value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_field: Option<String>,
}

impl SearchConfig {
    /// Text of `value` the configured matcher runs against.
    ///
    /// Falls back to the whole value when the leaf has no `search_field`.
    pub fn text_of<'v, T: SearchText + ?Sized>(&self, value: &'v T) -> Cow<'v, str> {
        self.search_field
            .as_deref()
            .and_then(|field| value.field_text(field))
            .unwrap_or_else(|| value.search_text())
    }
}

impl<T: SearchText + ?Sized> Matcher<T> for SearchConfig {
    fn score(&self, value: &T, search_text: &str) -> i32 {
        self.matcher.score(&*self.text_of(value), search_text)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OptionTreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> OptionTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path` if it exists, otherwise defaults, then apply env overrides
    pub fn load_or_default(path: Option<&Path>) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (OPTION_TREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
