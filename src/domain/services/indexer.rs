//! Option Indexer Domain Service
//!
//! Maps between the flat, depth-first position of a leaf (what a list widget
//! shows as "row n") and its place in the nested option tree.
//!
//! Only leaves take a flat index. Groups are containers and are skipped by the
//! count, but they do occupy a slot in [`OptionPath`]s, since a path indexes
//! siblings at each level.

use std::ops::ControlFlow;

use crate::domain::entities::OptionNode;
use crate::domain::policies::{Disableable, DisabledState};
use crate::domain::value_objects::{OptionPath, ResolvedOption};

use super::walk::for_each_leaf;

/// Count the leaves at every depth of the tree.
pub fn count_options<T>(tree: &[OptionNode<T>]) -> usize {
    tree.iter().map(OptionNode::leaf_count).sum()
}

/// Flat index of the first leaf equal to `target`.
///
/// Returns `None` when `target` is `None` or not in the tree.
pub fn index_of_option<T: PartialEq>(
    tree: &[OptionNode<T>],
    target: Option<&T>,
) -> Option<usize> {
    let target = target?;
    let mut position = 0;
    let found = for_each_leaf(tree, DisabledState::root(), &mut |leaf, _| {
        if leaf == target {
            return ControlFlow::Break(position);
        }
        position += 1;
        ControlFlow::Continue(())
    });

    match found {
        ControlFlow::Break(index) => Some(index),
        ControlFlow::Continue(()) => None,
    }
}

/// Structured path of the first leaf equal to `target`.
pub fn locate_option<T: PartialEq>(
    tree: &[OptionNode<T>],
    target: Option<&T>,
) -> Option<OptionPath> {
    let target = target?;
    let mut indices = Vec::new();
    if locate_in(tree, target, &mut indices) {
        Some(OptionPath::new(indices))
    } else {
        None
    }
}

fn locate_in<T: PartialEq>(
    nodes: &[OptionNode<T>],
    target: &T,
    indices: &mut Vec<usize>,
) -> bool {
    for (index, node) in nodes.iter().enumerate() {
        indices.push(index);
        let found = match node {
            OptionNode::Leaf(leaf) => leaf == target,
            OptionNode::Group(group) => locate_in(&group.options, target, indices),
        };
        if found {
            return true;
        }
        indices.pop();
    }
    false
}

/// Dotted path of the first leaf equal to `target`, e.g. `"2.1.0"`.
///
/// Returns an empty string when the tree is empty, `target` is `None`, or
/// the leaf is not found.
pub fn path_for_option<T: PartialEq>(tree: &[OptionNode<T>], target: Option<&T>) -> String {
    locate_option(tree, target)
        .map(|path| path.to_string())
        .unwrap_or_default()
}

/// Leaf at a flat depth-first index, with its effective disabled state.
///
/// Any index that is negative or past the last leaf resolves to
/// [`ResolvedOption::absent`]. Negative indices do not count from the end.
pub fn option_at_index<T, I>(tree: &[OptionNode<T>], index: I) -> ResolvedOption<&T>
where
    T: Disableable,
    I: TryInto<usize>,
{
    let Ok(target) = index.try_into() else {
        return ResolvedOption::absent();
    };

    let mut position = 0;
    let found = for_each_leaf(tree, DisabledState::root(), &mut |leaf, state| {
        if position == target {
            return ControlFlow::Break(ResolvedOption::new(leaf, state.resolve(leaf)));
        }
        position += 1;
        ControlFlow::Continue(())
    });

    match found {
        ControlFlow::Break(resolved) => resolved,
        ControlFlow::Continue(()) => ResolvedOption::absent(),
    }
}

/// Node (group or leaf) addressed by `path`.
///
/// Returns `None` for an empty path, an out-of-range index, or a path that
/// tries to descend through a leaf.
pub fn node_at_path<'a, T>(
    tree: &'a [OptionNode<T>],
    path: &OptionPath,
) -> Option<&'a OptionNode<T>> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = tree.get(*first)?;
    for index in rest {
        node = node.as_group()?.options.get(*index)?;
    }
    Some(node)
}
