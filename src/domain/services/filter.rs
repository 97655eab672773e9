//! Filter Domain Service
//!
//! Narrows an option tree to the leaves accepted by a matcher while keeping
//! the tree's shape: surviving leaves stay in their original groups, in their
//! original order, and groups left with nothing are dropped.

use crate::domain::entities::{copy_group, OptionNode};
use crate::domain::policies::{Disableable, DisabledState};

use super::matching::Matcher;

/// Filter `tree` down to the leaves `matcher` accepts for `search_text`.
///
/// The result is newly allocated. Surviving leaves are clones of the input
/// leaves, and every surviving group is rebuilt with [`copy_group`].
///
/// With `skip_disabled`, disabled groups are dropped whole and disabled leaves
/// are dropped even when they match. The engine gives an empty `search_text`
/// no special treatment, so whether it keeps everything is up to `matcher`.
pub fn filter_options<T, M>(
    tree: &[OptionNode<T>],
    search_text: &str,
    matcher: M,
    skip_disabled: bool,
) -> Vec<OptionNode<T>>
where
    T: Clone + Disableable,
    M: Matcher<T>,
{
    let filtered = filter_level(
        tree,
        search_text,
        &matcher,
        skip_disabled,
        DisabledState::root(),
    );
    log::trace!(
        "filtered option tree for {:?}: {} of {} top-level nodes kept",
        search_text,
        filtered.len(),
        tree.len()
    );
    filtered
}

fn filter_level<T, M>(
    nodes: &[OptionNode<T>],
    search_text: &str,
    matcher: &M,
    skip_disabled: bool,
    state: DisabledState,
) -> Vec<OptionNode<T>>
where
    T: Clone + Disableable,
    M: Matcher<T>,
{
    let mut kept = Vec::new();

    for node in nodes {
        match node {
            OptionNode::Leaf(leaf) => {
                if skip_disabled && state.resolve(leaf) {
                    continue;
                }
                if matcher.matches(leaf, search_text) {
                    kept.push(OptionNode::Leaf(leaf.clone()));
                }
            }
            OptionNode::Group(group) => {
                if skip_disabled && group.is_disabled() {
                    continue;
                }
                let options = filter_level(
                    &group.options,
                    search_text,
                    matcher,
                    skip_disabled,
                    state.enter(group),
                );
                if !options.is_empty() {
                    kept.push(OptionNode::Group(copy_group(group, options)));
                }
            }
        }
    }

    kept
}
