//! Trees shared by the service unit tests.

use serde_json::{json, Value};

use crate::domain::entities::{OptionGroup, OptionNode};

pub(crate) fn leaves(values: &[&'static str]) -> Vec<OptionNode<&'static str>> {
    values.iter().copied().map(OptionNode::leaf).collect()
}

pub(crate) fn group(
    name: &str,
    options: Vec<OptionNode<&'static str>>,
) -> OptionNode<&'static str> {
    OptionGroup::new(name).with_options(options).into()
}

pub(crate) fn basic_options() -> Vec<OptionNode<&'static str>> {
    leaves(&["zero", "one", "two", "three", "four", "five"])
}

pub(crate) fn grouped_options() -> Vec<OptionNode<&'static str>> {
    vec![
        group("Smalls", leaves(&["zero", "one", "two", "three"])),
        group("Mediums", leaves(&["four", "five", "six"])),
        group(
            "Bigs",
            vec![
                group("Fairly big", leaves(&["seven", "eight", "nine"])),
                group("Really big", leaves(&["ten", "eleven", "twelve"])),
                OptionNode::leaf("thirteen"),
            ],
        ),
        OptionNode::leaf("one hundred"),
        OptionNode::leaf("one thousand"),
    ]
}

pub(crate) fn grouped_options_with_disabled_things() -> Vec<OptionNode<Value>> {
    serde_json::from_value(json!([
        {
            "groupName": "Smalls",
            "options": ["zero", { "disabled": true, "value": "one" }, "two", "three"]
        },
        { "groupName": "Mediums", "options": ["four", "five", "six"] },
        {
            "groupName": "Bigs",
            "disabled": true,
            "options": [
                { "groupName": "Fairly big", "options": ["seven", "eight", "nine"] },
                { "groupName": "Really big", "options": ["ten", "eleven", "twelve"] },
                "thirteen"
            ]
        },
        "one hundred",
        "one thousand"
    ]))
    .expect("fixture is valid option JSON")
}

/// Case-insensitive substring matcher over plain strings.
pub(crate) fn contains_ignore_case(value: &str, search_text: &str) -> i32 {
    if value.to_lowercase().contains(&search_text.to_lowercase()) {
        0
    } else {
        -1
    }
}

/// Same as [`contains_ignore_case`], for JSON leaves; non-string leaves never match.
pub(crate) fn json_contains_ignore_case(value: &Value, search_text: &str) -> i32 {
    value
        .as_str()
        .map_or(-1, |text| contains_ignore_case(text, search_text))
}
