//! Option path value object
//!
//! A path locates a node by its sibling index at every level, counting groups
//! and leaves together. It renders as the indices joined with dots, so the
//! first child of the second top-level group is `1.0`.

use std::fmt;
use std::str::FromStr;

use crate::error::{OptionTreeError, OptionTreeResult};

/// Per-level sibling indices from the root down to a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct OptionPath(Vec<usize>);

impl OptionPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The sibling index at each level
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of levels (1 for a top-level node)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the containing group, if any
    pub fn parent(&self) -> Option<OptionPath> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }
}

impl From<Vec<usize>> for OptionPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, index) in self.0.iter().enumerate() {
            if level > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for OptionPath {
    type Err = OptionTreeError;

    fn from_str(s: &str) -> OptionTreeResult<Self> {
        let invalid = |reason: &str| OptionTreeError::InvalidPath {
            path: s.to_string(),
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("path is empty"));
        }

        s.split('.')
            .map(|segment| {
                if segment.is_empty() {
                    return Err(invalid("empty segment"));
                }
                segment
                    .parse::<usize>()
                    .map_err(|_| invalid(&format!("'{}' is not an index", segment)))
            })
            .collect::<OptionTreeResult<Vec<_>>>()
            .map(Self)
    }
}
