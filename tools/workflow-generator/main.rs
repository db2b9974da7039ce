use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random editor workflows for exercising the resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated workflow to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of processing nodes, not counting reroutes
    #[arg(long, default_value_t = 50)]
    nodes: usize,

    /// Probability that a connection is routed through a chain of reroutes
    #[arg(long, default_value_t = 0.3)]
    reroute_ratio: f64,

    /// Probability that a processing node is bypassed
    #[arg(long, default_value_t = 0.1)]
    bypass_ratio: f64,
}

/// Accumulates nodes and links while keeping ids unique.
struct WorkflowSketch {
    nodes: Vec<Value>,
    links: Vec<Value>,
    next_node_id: i64,
    next_link_id: i64,
}

impl WorkflowSketch {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            next_node_id: 1,
            next_link_id: 1,
        }
    }

    fn node_id(&mut self) -> i64 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    fn link(&mut self, origin: i64, target: i64) -> i64 {
        let id = self.next_link_id;
        self.next_link_id += 1;
        self.links.push(json!([id, origin, 0, target, 0, "IMAGE"]));
        id
    }

    /// Connects `origin` to `target`, optionally through a chain of reroutes,
    /// and returns the id of the link that enters `target`.
    fn connect(&mut self, rng: &mut ThreadRng, origin: i64, target: i64, reroutes: usize) -> i64 {
        let mut upstream = origin;
        for _ in 0..reroutes {
            let reroute = self.node_id();
            let incoming = self.link(upstream, reroute);
            self.nodes.push(json!({
                "id": reroute,
                "type": "Reroute",
                "mode": 0,
                "inputs": [{ "name": "", "type": "*", "link": incoming }],
                "properties": { "showOutputText": rng.random_bool(0.5) },
            }));
            upstream = reroute;
        }
        self.link(upstream, target)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.reroute_ratio) || !(0.0..=1.0).contains(&cli.bypass_ratio) {
        eprintln!("Error: --reroute-ratio and --bypass-ratio must be between 0 and 1");
        std::process::exit(1);
    }
    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    println!("Generating workflow with {} processing nodes...", cli.nodes);

    let mut sketch = WorkflowSketch::new();
    let mut producers: Vec<i64> = Vec::new();

    let loader = sketch.node_id();
    sketch.nodes.push(json!({
        "id": loader,
        "type": "LoadImage",
        "mode": 0,
        "inputs": [],
        "widgets_values": ["input.png", "image"],
        "properties": { "Node name for S&R": "LoadImage" },
    }));
    producers.push(loader);

    let mut reroute_count = 0;
    let mut bypass_count = 0;
    for index in 1..cli.nodes {
        let id = sketch.node_id();
        let origin = producers[rng.random_range(0..producers.len())];
        let reroutes = if rng.random_bool(cli.reroute_ratio) {
            rng.random_range(1..=3)
        } else {
            0
        };
        reroute_count += reroutes;
        let link = sketch.connect(&mut rng, origin, id, reroutes);

        let mode = if rng.random_bool(cli.bypass_ratio) {
            bypass_count += 1;
            4
        } else {
            0
        };
        sketch.nodes.push(generate_processing_node(&mut rng, id, index, link, mode));
        producers.push(id);
    }

    let workflow = json!({
        "last_node_id": sketch.next_node_id - 1,
        "last_link_id": sketch.next_link_id - 1,
        "nodes": sketch.nodes,
        "links": sketch.links,
        "version": 0.4,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&workflow)?)?;

    println!("-> {} reroute(s), {} bypassed node(s).", reroute_count, bypass_count);
    println!("Successfully generated and saved workflow to '{}'", cli.output);

    Ok(())
}

/// An image-processing node with one linked image input and a few widgets,
/// including a seed followed by its control-widget value.
fn generate_processing_node(
    rng: &mut ThreadRng,
    id: i64,
    index: usize,
    image_link: i64,
    mode: i64,
) -> Value {
    json!({
        "id": id,
        "type": "ImageProcess",
        "title": format!("Process #{index}"),
        "mode": mode,
        "inputs": [
            { "name": "image", "type": "IMAGE", "link": image_link, "localized_name": "image" },
            { "name": "strength", "type": "FLOAT", "widget": { "name": "strength" }, "link": null },
            { "name": "seed", "type": "INT", "widget": { "name": "seed" }, "link": null },
            { "name": "sampler_name", "type": "COMBO", "widget": { "name": "sampler_name" }, "link": null },
        ],
        "widgets_values": [
            rng.random_range(0.0..1.0),
            rng.random_range(0..u32::MAX),
            "randomize",
            "euler",
        ],
    })
}
