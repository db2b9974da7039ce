use super::id::{LinkId, NodeId};
use serde::Deserialize;
use serde_json::Value;

/// A directed connection from one node's output slot to another node's input slot.
///
/// Accepts both the positional encoding used by saved workflows
/// (`[id, origin_id, origin_slot, target_id, target_slot, type]`) and the
/// object encoding (`{"id": .., "origin_id": .., ...}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLink")]
pub struct Link {
    pub id: LinkId,
    pub origin_id: NodeId,
    pub origin_slot: u32,
    pub target_id: NodeId,
    pub target_slot: u32,
    /// The type carried along the link, e.g. `"IMAGE"`.
    pub link_type: Option<String>,
}

impl Link {
    pub fn new(
        id: impl Into<LinkId>,
        origin: impl Into<NodeId>,
        origin_slot: u32,
        target: impl Into<NodeId>,
        target_slot: u32,
        link_type: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            origin_id: origin.into(),
            origin_slot,
            target_id: target.into(),
            target_slot,
            link_type: link_type.map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLink {
    Positional(Vec<Value>),
    Object(ObjectLink),
}

#[derive(Deserialize)]
struct ObjectLink {
    id: LinkId,
    origin_id: NodeId,
    origin_slot: u32,
    target_id: NodeId,
    target_slot: u32,
    #[serde(default, rename = "type")]
    link_type: Option<Value>,
}

impl TryFrom<RawLink> for Link {
    type Error = String;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        match raw {
            RawLink::Object(o) => Ok(Link {
                id: o.id,
                origin_id: o.origin_id,
                origin_slot: o.origin_slot,
                target_id: o.target_id,
                target_slot: o.target_slot,
                link_type: o.link_type.as_ref().and_then(carried_type),
            }),
            RawLink::Positional(fields) => {
                if fields.len() < 5 {
                    return Err(format!(
                        "link array needs at least 5 fields, found {}",
                        fields.len()
                    ));
                }
                let id = fields[0]
                    .as_i64()
                    .map(LinkId)
                    .ok_or_else(|| format!("invalid link id {}", fields[0]))?;
                let origin_id = NodeId::from_value(&fields[1])
                    .ok_or_else(|| format!("link {id}: invalid origin node {}", fields[1]))?;
                let origin_slot = slot(&fields[2])
                    .ok_or_else(|| format!("link {id}: invalid origin slot {}", fields[2]))?;
                let target_id = NodeId::from_value(&fields[3])
                    .ok_or_else(|| format!("link {id}: invalid target node {}", fields[3]))?;
                let target_slot = slot(&fields[4])
                    .ok_or_else(|| format!("link {id}: invalid target slot {}", fields[4]))?;
                Ok(Link {
                    id,
                    origin_id,
                    origin_slot,
                    target_id,
                    target_slot,
                    link_type: fields.get(5).and_then(carried_type),
                })
            }
        }
    }
}

fn slot(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn carried_type(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}
