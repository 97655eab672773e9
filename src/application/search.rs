//! Configured search
//!
//! Runs the filter and type-ahead services with the matcher and disabled
//! handling picked in a [`SearchConfig`], so callers that load settings from
//! a config file don't have to wire the pieces together themselves.

use crate::config::SearchConfig;
use crate::domain::entities::OptionNode;
use crate::domain::policies::Disableable;
use crate::domain::services::{filter_options, find_option_with_offset, Matcher, SearchText};

/// Filter `tree` with the configured matcher and `skip_disabled` flag.
pub fn filter_with_config<T>(
    tree: &[OptionNode<T>],
    search_text: &str,
    config: &SearchConfig,
) -> Vec<OptionNode<T>>
where
    T: Clone + Disableable + SearchText,
{
    let matcher = |value: &T, text: &str| config.score(value, text);
    filter_options(tree, search_text, matcher, config.skip_disabled)
}

/// Type-ahead lookup with the configured matcher and `skip_disabled` flag.
pub fn find_with_config<'a, T>(
    tree: &'a [OptionNode<T>],
    search_text: &str,
    offset: usize,
    config: &SearchConfig,
) -> Option<&'a T>
where
    T: Disableable + SearchText,
{
    let matcher = |value: &T, text: &str| config.score(value, text);
    find_option_with_offset(tree, search_text, matcher, offset, config.skip_disabled)
}
