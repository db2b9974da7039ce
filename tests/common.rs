//! Common test utilities for building workflows.
use kairo::prelude::*;
use serde_json::{Value, json};

/// A node with no inputs and no widget values.
#[allow(dead_code)]
pub fn node(id: i64, node_type: &str) -> WorkflowNode {
    WorkflowNode::new(id, node_type)
}

/// A reroute dot fed by `link`.
#[allow(dead_code)]
pub fn reroute(id: i64, link: i64) -> WorkflowNode {
    let mut node = WorkflowNode::new(id, "Reroute");
    node.mode = Some(0);
    node.inputs = vec![linked_input("", "*", link)];
    node
}

/// A bypassed (mode 4) node with the given inputs.
#[allow(dead_code)]
pub fn bypassed(id: i64, node_type: &str, inputs: Vec<NodeInput>) -> WorkflowNode {
    let mut node = WorkflowNode::new(id, node_type);
    node.mode = Some(4);
    node.inputs = inputs;
    node
}

#[allow(dead_code)]
pub fn linked_input(name: &str, input_type: &str, link: i64) -> NodeInput {
    let mut input = NodeInput::new(name);
    input.input_type = Some(json!(input_type));
    input.link = Some(LinkId(link));
    input
}

#[allow(dead_code)]
pub fn widget_input(name: &str, input_type: &str) -> NodeInput {
    let mut input = NodeInput::new(name);
    input.input_type = Some(json!(input_type));
    input.widget = Some(json!({ "name": name }));
    input
}

#[allow(dead_code)]
pub fn with_widgets(mut node: WorkflowNode, values: Value) -> WorkflowNode {
    node.widgets_values = Some(values);
    node
}

#[allow(dead_code)]
pub fn link(id: i64, origin: i64, origin_slot: u32, target: i64, target_slot: u32, link_type: &str) -> Link {
    Link::new(id, origin, origin_slot, target, target_slot, Some(link_type))
}

#[allow(dead_code)]
pub fn workflow(nodes: Vec<WorkflowNode>, links: Vec<Link>) -> Workflow {
    Workflow { nodes, links }
}

#[allow(dead_code)]
pub fn id(raw: &str) -> NodeId {
    NodeId::from(raw)
}

/// `LoadImage (1) -> Reroute (2) -> Upscale (3)`.
#[allow(dead_code)]
pub fn create_reroute_workflow() -> Workflow {
    let mut upscale = node(3, "Upscale");
    upscale.inputs = vec![linked_input("image", "IMAGE", 11)];
    workflow(
        vec![
            with_widgets(node(1, "LoadImage"), json!(["photo.png"])),
            reroute(2, 10),
            upscale,
        ],
        vec![
            link(10, 1, 0, 2, 0, "IMAGE"),
            link(11, 2, 0, 3, 0, "IMAGE"),
        ],
    )
}

/// A typical text-to-image graph with a reroute, a bypassed LoRA loader and
/// a sampler that uses control widgets.
#[allow(dead_code)]
pub const SAMPLER_WORKFLOW_JSON: &str = r#"{
  "last_node_id": 7,
  "last_link_id": 9,
  "nodes": [
    {
      "id": 4, "type": "CheckpointLoaderSimple", "mode": 0,
      "inputs": [],
      "outputs": [
        { "name": "MODEL", "type": "MODEL", "links": [1] },
        { "name": "CLIP", "type": "CLIP", "links": [2] },
        { "name": "VAE", "type": "VAE", "links": [3] }
      ],
      "properties": { "Node name for S&R": "CheckpointLoaderSimple" },
      "widgets_values": ["sd_xl_base_1.0.safetensors"]
    },
    {
      "id": 5, "type": "LoraLoader", "mode": 4,
      "inputs": [
        { "name": "model", "type": "MODEL", "link": 1 },
        { "name": "clip", "type": "CLIP", "link": 2 }
      ],
      "widgets_values": ["detail.safetensors", 1.0, 1.0]
    },
    {
      "id": 6, "type": "Reroute", "mode": 0,
      "inputs": [ { "name": "", "type": "*", "link": 4 } ]
    },
    {
      "id": 3, "type": "KSampler", "mode": 0, "title": "Main Sampler",
      "inputs": [
        { "name": "model", "type": "MODEL", "link": 5, "localized_name": "model" },
        { "name": "seed", "type": "INT", "widget": { "name": "seed" }, "link": null, "label": "Seed" },
        { "name": "steps", "type": "INT", "widget": { "name": "steps" }, "link": null },
        { "name": "sampler_name", "type": "COMBO", "widget": { "name": "sampler_name" }, "link": null },
        { "name": "scheduler", "type": "COMBO", "widget": { "name": "scheduler" }, "link": null }
      ],
      "properties": { "Node name for S&R": "KSampler" },
      "widgets_values": [156680208700286, "randomize", 20, "euler", "normal"]
    },
    {
      "id": 7, "type": "VAEDecode", "mode": 0,
      "inputs": [
        { "name": "samples", "type": "LATENT", "link": 7 },
        { "name": "vae", "type": "VAE", "link": 9 }
      ],
      "properties": {}
    }
  ],
  "links": [
    [1, 4, 0, 5, 0, "MODEL"],
    [2, 4, 1, 5, 1, "CLIP"],
    [4, 5, 0, 6, 0, "MODEL"],
    [5, 6, 0, 3, 0, "MODEL"],
    [7, 3, 0, 7, 0, "LATENT"],
    [9, 4, 2, 7, 1, "VAE"]
  ],
  "version": 0.4
}"#;
