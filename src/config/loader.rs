//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::{ConfigWarning, MatcherKind};
use crate::error::{OptionTreeError, OptionTreeResult};

use super::types::Config;

pub const ENV_SKIP_DISABLED: &str = "OPTION_TREE_SKIP_DISABLED";
pub const ENV_MATCHER: &str = "OPTION_TREE_MATCHER";
pub const ENV_SEARCH_FIELD: &str = "OPTION_TREE_SEARCH_FIELD";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OptionTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OptionTreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("loaded config from {}: {:?}", path.display(), config);

    Ok((config, warnings))
}

/// Load from `path` if it exists, otherwise defaults, then apply env overrides.
///
/// A file that fails to load is logged and replaced by defaults.
pub fn load_or_default(path: Option<&Path>) -> Config {
    if let Some(path) = path.filter(|p| p.exists()) {
        match Config::load(path) {
            Ok(config) => return with_env_overrides(config),
            Err(err) => log::warn!("ignoring config: {}", err),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (OPTION_TREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`, keyed by environment variable name.
///
/// Values that cannot be understood leave the setting unchanged.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // OPTION_TREE_SKIP_DISABLED
    if let Some(val) = lookup(ENV_SKIP_DISABLED) {
        match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => config.search.skip_disabled = true,
            "0" | "false" | "no" | "off" => config.search.skip_disabled = false,
            other => log::warn!("ignoring {}={:?}", ENV_SKIP_DISABLED, other),
        }
    }

    // OPTION_TREE_MATCHER
    if let Some(val) = lookup(ENV_MATCHER) {
        match MatcherKind::parse_loose(&val) {
            Some(kind) => config.search.matcher = kind,
            None => log::warn!("ignoring {}={:?}", ENV_MATCHER, val),
        }
    }

    // OPTION_TREE_SEARCH_FIELD (empty clears it)
    if let Some(val) = lookup(ENV_SEARCH_FIELD) {
        let field = val.trim();
        config.search.search_field = (!field.is_empty()).then(|| field.to_string());
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["search", "skip_disabled", "matcher", "search_field"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
