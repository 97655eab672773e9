//! Depth-first leaf walk shared by the indexing, filtering and navigation
//! services.

use std::ops::ControlFlow;

use crate::domain::entities::OptionNode;
use crate::domain::policies::DisabledState;

/// Visit every leaf in depth-first order.
///
/// The visitor receives each leaf together with the disabled state inherited
/// from its ancestor groups, and may stop the walk early by breaking.
pub(crate) fn for_each_leaf<'a, T, B, F>(
    nodes: &'a [OptionNode<T>],
    state: DisabledState,
    visit: &mut F,
) -> ControlFlow<B>
where
    F: FnMut(&'a T, DisabledState) -> ControlFlow<B>,
{
    for node in nodes {
        match node {
            OptionNode::Leaf(leaf) => visit(leaf, state)?,
            OptionNode::Group(group) => for_each_leaf(&group.options, state.enter(group), visit)?,
        }
    }
    ControlFlow::Continue(())
}
