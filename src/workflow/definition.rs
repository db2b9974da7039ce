use super::id::{LinkId, NodeId};
use super::link::Link;
use crate::error::WorkflowError;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Property key editors use for a node's search-and-replace name.
pub const FALLBACK_NAME_PROPERTY: &str = "Node name for S&R";

/// A raw workflow as saved by a node editor: nodes plus point-to-point links.
///
/// Decoding is permissive: missing or `null` collections decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workflow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<WorkflowNode>,
    /// Link records that fail to decode are skipped with a warning; inputs
    /// pointing at them end up unresolved.
    #[serde(default, deserialize_with = "skip_invalid_links")]
    pub links: Vec<Link>,
}

impl Workflow {
    /// Decodes a workflow from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, WorkflowError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decodes a workflow from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, WorkflowError> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            Value::Null => Err(WorkflowError::NotAnObject("null")),
            Value::Bool(_) => Err(WorkflowError::NotAnObject("a boolean")),
            Value::Number(_) => Err(WorkflowError::NotAnObject("a number")),
            Value::String(_) => Err(WorkflowError::NotAnObject("a string")),
            Value::Array(_) => Err(WorkflowError::NotAnObject("an array")),
        }
    }

    /// First node declared with the given id.
    pub fn node(&self, id: &NodeId) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}

/// A single node of the editor graph.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowNode {
    pub id: NodeId,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mode: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<NodeInput>,
    /// Positional widget values. Usually an array; some node packs store an object.
    #[serde(default)]
    pub widgets_values: Option<Value>,
}

impl WorkflowNode {
    pub fn new(id: impl Into<NodeId>, node_type: &str) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.to_string(),
            title: None,
            mode: None,
            properties: Map::new(),
            inputs: Vec::new(),
            widgets_values: None,
        }
    }

    /// The positional widget values, or an empty slice when none are declared
    /// or they are not stored as an array.
    pub fn widget_values(&self) -> &[Value] {
        match &self.widgets_values {
            Some(Value::Array(values)) => values,
            _ => &[],
        }
    }

    /// The search-and-replace name from `properties`.
    ///
    /// Strings are taken as-is. Other non-empty values (non-zero numbers,
    /// `true`, non-empty arrays and objects) are rendered as JSON text.
    /// Empty and falsy values count as absent.
    pub fn fallback_name(&self) -> Option<Cow<'_, str>> {
        let value = self.properties.get(FALLBACK_NAME_PROPERTY)?;
        match value {
            Value::String(name) if !name.is_empty() => Some(Cow::Borrowed(name.as_str())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            Value::Array(items) if !items.is_empty() => Some(Cow::Owned(value.to_string())),
            Value::Object(map) if !map.is_empty() => Some(Cow::Owned(value.to_string())),
            _ => None,
        }
    }

    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.iter().any(|input| input.name == name)
    }
}

/// A declared input slot of a node.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeInput {
    pub name: String,
    #[serde(rename = "type", default)]
    pub input_type: Option<Value>,
    #[serde(default)]
    pub link: Option<LinkId>,
    /// Present when the input can also be fed by a positional widget value.
    #[serde(default)]
    pub widget: Option<Value>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub localized_name: Option<String>,
}

impl NodeInput {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: None,
            link: None,
            widget: None,
            label: None,
            localized_name: None,
        }
    }

    pub fn is_widget(&self) -> bool {
        self.widget.is_some()
    }

    /// The human-readable name: the label, else the localized name.
    pub fn display_name(&self) -> Option<&str> {
        self.label.as_deref().or(self.localized_name.as_deref())
    }

    /// The declared type as a string, if it is one.
    pub fn type_name(&self) -> Option<&str> {
        self.input_type.as_ref().and_then(Value::as_str)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn skip_invalid_links<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Link>(record) {
            Ok(link) => Some(link),
            Err(e) => {
                log::warn!("Skipping undecodable link record: {}", e);
                None
            }
        })
        .collect())
}
