use super::value::{FieldAnnotation, InputValue};
use crate::workflow::NodeId;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Display metadata of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Ordered `input name -> value` mapping of a resolved node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputMap(Vec<(String, InputValue)>);

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an input, replacing an earlier value of the same name in place.
    pub fn insert(&mut self, name: &str, value: InputValue) {
        match self.0.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &InputValue> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for InputMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One real node of the resolved graph.
///
/// Auxiliary data (metadata, localized names, declared types, sampler and
/// scheduler catalogs) are named fields, so they can never be confused with
/// inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNode {
    #[serde(skip)]
    pub id: NodeId,
    pub class_type: String,
    pub inputs: InputMap,
    #[serde(rename = "_meta")]
    pub meta: NodeMeta,
    pub localized_names: Vec<FieldAnnotation>,
    pub types: Vec<FieldAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samplers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedulers: Option<Vec<String>>,
}

impl ResolvedNode {
    pub fn new(id: NodeId, class_type: &str) -> Self {
        Self {
            id,
            class_type: class_type.to_string(),
            inputs: InputMap::new(),
            meta: NodeMeta::default(),
            localized_names: Vec::new(),
            types: Vec::new(),
            samplers: None,
            schedulers: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn input(&self, name: &str) -> Option<&InputValue> {
        self.inputs.get(name)
    }
}
