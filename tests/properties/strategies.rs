//! Tree generators shared by the property tests.

use proptest::prelude::*;
use serde_json::{json, Value};

use option_tree::{OptionGroup, OptionNode};

/// Tree layout before labels are assigned. Flags are `disabled`.
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf(bool),
    Group(bool, Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    any::<bool>()
        .prop_map(Shape::Leaf)
        .prop_recursive(4, 48, 6, |inner| {
            (any::<bool>(), prop::collection::vec(inner, 0..6))
                .prop_map(|(disabled, children)| Shape::Group(disabled, children))
        })
}

pub fn shapes() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(shape(), 0..8)
}

/// A tree whose leaves are unique strings (`"option 0"`, `"option 1"`, ...)
/// and whose groups are never disabled.
pub fn string_tree(shapes: &[Shape]) -> Vec<OptionNode<String>> {
    fn build(shapes: &[Shape], next: &mut usize) -> Vec<OptionNode<String>> {
        shapes
            .iter()
            .map(|shape| match shape {
                Shape::Leaf(_) => {
                    let label = format!("option {}", next);
                    *next += 1;
                    OptionNode::leaf(label)
                }
                Shape::Group(_, children) => {
                    let name = format!("group {}", next);
                    OptionGroup::new(name)
                        .with_options(build(children, next))
                        .into()
                }
            })
            .collect()
    }

    build(shapes, &mut 0)
}

/// A JSON tree carrying the generated disabled flags, plus the expected
/// effective disabled state of every leaf in depth-first order.
pub fn json_tree(shapes: &[Shape]) -> (Vec<OptionNode<Value>>, Vec<bool>) {
    fn build(
        shapes: &[Shape],
        ancestor_disabled: bool,
        next: &mut usize,
        expected: &mut Vec<bool>,
    ) -> Vec<OptionNode<Value>> {
        shapes
            .iter()
            .map(|shape| match shape {
                Shape::Leaf(disabled) => {
                    let leaf = json!({ "value": format!("option {}", next), "disabled": disabled });
                    *next += 1;
                    expected.push(ancestor_disabled || *disabled);
                    OptionNode::leaf(leaf)
                }
                Shape::Group(disabled, children) => {
                    let options = build(children, ancestor_disabled || *disabled, next, expected);
                    OptionGroup::new(format!("group {}", next))
                        .with_options(options)
                        .with_disabled(*disabled)
                        .into()
                }
            })
            .collect()
    }

    let mut expected = Vec::new();
    let tree = build(shapes, false, &mut 0, &mut expected);
    (tree, expected)
}

/// Every leaf in depth-first order.
pub fn flatten<T: Clone>(tree: &[OptionNode<T>]) -> Vec<T> {
    let mut leaves = Vec::new();
    for node in tree {
        match node {
            OptionNode::Leaf(leaf) => leaves.push(leaf.clone()),
            OptionNode::Group(group) => leaves.extend(flatten(&group.options)),
        }
    }
    leaves
}
