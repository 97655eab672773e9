//! Option tree nodes
//!
//! An option tree is an ordered list of [`OptionNode`]s. Each node is either a
//! selectable leaf value or a named [`OptionGroup`] that recursively holds more
//! nodes.
//!
//! On the wire a group is any JSON object carrying a non-empty `groupName` and
//! an array under `options`. Every other value, including an object with only
//! one of those keys, is a leaf.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

const GROUP_NAME_KEY: &str = "groupName";
const OPTIONS_KEY: &str = "options";
const DISABLED_KEY: &str = "disabled";

/// Returns true if a raw JSON value has the shape of a group.
pub fn is_group(value: &Value) -> bool {
    value.as_object().is_some_and(is_group_object)
}

fn is_group_object(fields: &Map<String, Value>) -> bool {
    fields.get(GROUP_NAME_KEY).is_some_and(is_present_label)
        && fields.get(OPTIONS_KEY).is_some_and(Value::is_array)
}

/// `null`, `false`, `0` and `""` do not name a group.
fn is_present_label(label: &Value) -> bool {
    match label {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A node in an option tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionNode<T> {
    /// Named container of further nodes
    Group(OptionGroup<T>),
    /// Selectable value
    Leaf(T),
}

/// A named group of options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroup<T> {
    /// Display label, kept exactly as it was given
    #[serde(rename = "groupName")]
    pub group_name: Value,
    /// Child nodes, in display order
    pub options: Vec<OptionNode<T>>,
    /// When `Some(true)`, every descendant leaf is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Caller-defined fields, carried through copies untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> OptionNode<T> {
    /// Create a leaf node
    pub fn leaf(value: T) -> Self {
        OptionNode::Leaf(value)
    }

    /// Check if this node is a group
    pub fn is_group(&self) -> bool {
        matches!(self, OptionNode::Group(_))
    }

    /// Check if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, OptionNode::Leaf(_))
    }

    pub fn as_group(&self) -> Option<&OptionGroup<T>> {
        match self {
            OptionNode::Group(group) => Some(group),
            OptionNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            OptionNode::Leaf(value) => Some(value),
            OptionNode::Group(_) => None,
        }
    }

    /// Number of leaves under this node (1 for a leaf)
    pub fn leaf_count(&self) -> usize {
        match self {
            OptionNode::Leaf(_) => 1,
            OptionNode::Group(group) => group.leaf_count(),
        }
    }
}

impl<T> From<OptionGroup<T>> for OptionNode<T> {
    fn from(group: OptionGroup<T>) -> Self {
        OptionNode::Group(group)
    }
}

impl<T> OptionGroup<T> {
    /// Create an empty, enabled group
    pub fn new(group_name: impl Into<Value>) -> Self {
        Self {
            group_name: group_name.into(),
            options: Vec::new(),
            disabled: None,
            extra: Map::new(),
        }
    }

    /// Replace the children
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionNode<T>>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Set the `disabled` flag
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Attach a caller-defined field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Add a child node
    pub fn push(&mut self, node: impl Into<OptionNode<T>>) {
        self.options.push(node.into());
    }

    /// The label as text. Non-string labels render as compact JSON.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.group_name {
            Value::String(text) => Cow::Borrowed(text.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Whether the group itself is flagged disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled == Some(true)
    }

    /// Number of leaves at any depth below this group
    pub fn leaf_count(&self) -> usize {
        self.options.iter().map(OptionNode::leaf_count).sum()
    }
}

/// Copy a group with its children replaced.
///
/// The name, the `disabled` flag and every caller-defined field are cloned
/// into the new group. `group` is only borrowed, so the caller's value is
/// left as it was.
pub fn copy_group<T, U>(group: &OptionGroup<T>, options: Vec<OptionNode<U>>) -> OptionGroup<U> {
    OptionGroup {
        group_name: group.group_name.clone(),
        options,
        disabled: group.disabled,
        extra: group.extra.clone(),
    }
}

impl<T: DeserializeOwned> OptionNode<T> {
    /// Decode a node from raw JSON, using [`is_group`] to pick the shape.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(fields) if is_group_object(&fields) => {
                OptionGroup::from_fields(fields).map(OptionNode::Group)
            }
            other => serde_json::from_value(other).map(OptionNode::Leaf),
        }
    }
}

impl<T: DeserializeOwned> OptionGroup<T> {
    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let group_name = fields.remove(GROUP_NAME_KEY).unwrap_or_default();

        let options = match fields.remove(OPTIONS_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(OptionNode::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        // Only a real boolean is lifted out; anything else stays a custom field.
        let disabled = match fields.remove(DISABLED_KEY) {
            Some(Value::Bool(flag)) => Some(flag),
            Some(other) => {
                fields.insert(DISABLED_KEY.to_string(), other);
                None
            }
            None => None,
        };

        Ok(Self {
            group_name,
            options,
            disabled,
            extra: fields,
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OptionNode<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        OptionNode::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OptionGroup<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(fields) if is_group_object(&fields) => {
                OptionGroup::from_fields(fields).map_err(serde::de::Error::custom)
            }
            _ => Err(serde::de::Error::custom(
                "expected an object with a non-empty `groupName` and an `options` array",
            )),
        }
    }
}
