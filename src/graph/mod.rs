//! The resolved, execution-ready graph.
//!
//! Every entry is a real node whose inputs are either literal values or
//! direct references to a producing node's output slot. Serialization
//! produces the prompt format consumed by the execution backend:
//!
//! ```json
//! {
//!   "3": {
//!     "class_type": "Upscale",
//!     "inputs": { "image": ["1", 0] },
//!     "_meta": { "title": "Upscale" },
//!     "localized_names": [],
//!     "types": []
//!   }
//! }
//! ```

mod entry;
mod value;

pub use entry::*;
pub use value::*;

use crate::workflow::NodeId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Keys that live at the top level of a node entry and must never appear as
/// input names.
pub const RESERVED_INPUT_KEYS: [&str; 5] =
    ["_meta", "_localized_names", "_types", "_samplers", "_schedulers"];

pub fn is_reserved_key(name: &str) -> bool {
    RESERVED_INPUT_KEYS.contains(&name)
}

/// Mapping from node id to resolved node entry, in node declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedGraph {
    nodes: Vec<ResolvedNode>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: ResolvedNode) {
        self.nodes.push(node);
    }

    pub fn get(&self, id: &NodeId) -> Option<&ResolvedNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    pub fn to_value(&self) -> serde_json::Value {
        // A map of strings to plain data cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Serialize for ResolvedGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for node in &self.nodes {
            map.serialize_entry(&node.id, node)?;
        }
        map.end()
    }
}
