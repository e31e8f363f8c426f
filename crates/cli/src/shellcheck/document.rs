// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline document model.
//!
//! A small ordered view of a YAML value: null, scalar, sequence or mapping.
//! Mapping keys keep document order and are rendered as strings.

use serde_yaml::Value;

/// GitLab tag that splices in a sequence defined elsewhere.
const REFERENCE_TAG: &str = "!reference";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null,
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl Node {
    /// Name of the variant, used in shape errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Number(n) => Node::Scalar(n.to_string()),
            Value::String(s) => Node::Scalar(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key_text(key), Node::from(value)))
                    .collect(),
            ),
            // References are checked where they are defined.
            Value::Tagged(tagged) if tagged.tag == REFERENCE_TAG => Node::Null,
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

fn key_text(key: Value) -> String {
    match Node::from(key) {
        Node::Scalar(text) => text,
        Node::Null => "null".to_string(),
        other => format!("{other:?}"),
    }
}

/// Parse YAML text into a [`Node`], applying `<<` merge keys.
pub fn parse(text: &str) -> Result<Node, serde_yaml::Error> {
    let mut value: Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    Ok(Node::from(value))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
