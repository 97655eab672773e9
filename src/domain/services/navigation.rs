//! Navigation Domain Service
//!
//! Moves a highlight through the flat leaf order of an option tree, stepping
//! over disabled entries, and finds the next leaf a type-ahead buffer points at.

use std::ops::ControlFlow;

use crate::domain::entities::OptionNode;
use crate::domain::policies::{Disableable, DisabledState};

use super::indexer::{count_options, index_of_option, option_at_index};
use super::matching::Matcher;
use super::walk::for_each_leaf;

/// The selectable leaf `step` positions away from `current`.
///
/// With no current leaf (or one that is not in the tree), stepping starts as
/// if from just before the first leaf. The first candidate is clamped into
/// the tree, then the walk keeps moving by `step` past disabled leaves.
/// Returns `None` if it runs off either end, the tree is empty, or `step` is
/// zero and lands on a disabled leaf.
pub fn advance_selectable_option<'a, T>(
    tree: &'a [OptionNode<T>],
    current: Option<&T>,
    step: isize,
) -> Option<&'a T>
where
    T: PartialEq + Disableable,
{
    let count = count_options(tree);
    if count == 0 {
        return None;
    }

    let last = isize::try_from(count - 1).unwrap_or(isize::MAX);
    let start = index_of_option(tree, current)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(-1);
    let mut index = start.saturating_add(step).clamp(0, last);

    loop {
        let resolved = option_at_index(tree, index);
        match resolved.option {
            Some(option) if !resolved.disabled => return Some(option),
            Some(_) if step != 0 => index = index.saturating_add(step),
            _ => {
                log::trace!("no selectable option from {} stepping by {}", start, step);
                return None;
            }
        }
    }
}

/// Find the first leaf matching `text` at or after flat index `offset`,
/// wrapping around to the first match before `offset` if there is none after.
///
/// Every leaf takes a flat index, including skipped disabled ones, so offsets
/// line up with [`option_at_index`]. With `skip_disabled`, disabled leaves and
/// leaves under disabled groups are never returned.
pub fn find_option_with_offset<'a, T, M>(
    tree: &'a [OptionNode<T>],
    text: &str,
    matcher: M,
    offset: usize,
    skip_disabled: bool,
) -> Option<&'a T>
where
    T: Disableable,
    M: Matcher<T>,
{
    let mut position = 0;
    let mut before_offset = None;

    let found = for_each_leaf(tree, DisabledState::root(), &mut |leaf, state| {
        let index = position;
        position += 1;

        if skip_disabled && state.resolve(leaf) {
            return ControlFlow::Continue(());
        }
        if !matcher.matches(leaf, text) {
            return ControlFlow::Continue(());
        }
        if index >= offset {
            return ControlFlow::Break(leaf);
        }
        if before_offset.is_none() {
            before_offset = Some(leaf);
        }
        ControlFlow::Continue(())
    });

    match found {
        ControlFlow::Break(leaf) => Some(leaf),
        ControlFlow::Continue(()) => before_offset,
    }
}
