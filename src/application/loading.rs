//! Option tree loading
//!
//! Option data usually arrives as JSON. Groups are recognized by shape (a
//! `groupName` plus an `options` array), so any JSON value that isn't a group
//! is kept as a leaf.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::entities::OptionNode;
use crate::error::OptionTreeResult;

/// Parse a JSON array of options into a tree of JSON leaves.
pub fn parse_tree(json: &str) -> OptionTreeResult<Vec<OptionNode<Value>>> {
    let tree: Vec<OptionNode<Value>> = serde_json::from_str(json)?;
    log::debug!("parsed option tree with {} top-level nodes", tree.len());
    Ok(tree)
}

/// Read and parse a JSON option file.
pub fn load_tree(path: &Path) -> OptionTreeResult<Vec<OptionNode<Value>>> {
    let content = fs::read_to_string(path)?;
    parse_tree(&content)
}
