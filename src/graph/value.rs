use crate::workflow::NodeId;
use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};
use serde_json::Value;
use std::fmt;

/// Reference to a producing node's output slot.
///
/// Serializes as the two-element array `[node_id, slot]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub node_id: NodeId,
    pub slot: u32,
}

impl NodeRef {
    pub fn new(node_id: impl Into<NodeId>, slot: u32) -> Self {
        Self {
            node_id: node_id.into(),
            slot,
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node_id, self.slot)
    }
}

impl Serialize for NodeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.node_id)?;
        tuple.serialize_element(&self.slot)?;
        tuple.end()
    }
}

/// The value of a resolved input.
///
/// Keeping references and literals apart lets consumers tell a graph edge
/// from a literal that happens to be a two-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Link(NodeRef),
    Literal(Value),
}

impl InputValue {
    pub fn as_link(&self) -> Option<&NodeRef> {
        match self {
            InputValue::Link(node_ref) => Some(node_ref),
            InputValue::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            InputValue::Literal(value) => Some(value),
            InputValue::Link(_) => None,
        }
    }

    /// True for a mapping that holds at least one list-valued entry.
    pub fn is_mapping_with_list(&self) -> bool {
        match self {
            InputValue::Literal(Value::Object(map)) => map.values().any(Value::is_array),
            _ => false,
        }
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputValue::Link(node_ref) => node_ref.serialize(serializer),
            InputValue::Literal(value) => value.serialize(serializer),
        }
    }
}

/// A single `name -> value` annotation, serialized as a one-entry object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAnnotation {
    pub name: String,
    pub value: Value,
}

impl FieldAnnotation {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

impl Serialize for FieldAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}
