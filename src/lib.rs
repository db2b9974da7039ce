//! # Kairo - Workflow Graph Resolver
//!
//! **Kairo** turns the workflow a node editor saves (nodes, widget values and
//! point-to-point links) into a flat, execution-ready prompt graph in which
//! every input is either a literal value or a direct reference to a producing
//! node's output slot.
//!
//! Editors let users add nodes that exist purely for visual organization:
//! reroute dots and bypassed nodes. Those never reach the output. Links
//! running through them are rewired to the nearest real upstream producer.
//!
//! ## Core Workflow
//!
//! 1.  **Load the document**: decode a saved workflow into a [`workflow::Workflow`],
//!     either directly with `Workflow::from_json` or through the `IntoWorkflow` trait.
//! 2.  **Configure**: build a [`resolver::Resolver`] with `Resolver::builder()`, optionally
//!     supplying [`config::ResolverOptions`] and a sampler/scheduler catalog.
//! 3.  **Resolve**: `resolver.resolve(&workflow)` classifies nodes, traces every link back
//!     through pass-through nodes and assembles one entry per real node.
//! 4.  **Emit**: serialize the [`graph::ResolvedGraph`] to JSON. Anything that could not be
//!     resolved is listed in the resolution's diagnostics and logged through `log`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("workflow.json")?;
//!     let workflow = Workflow::from_json(&json)?;
//!
//!     let resolver = Resolver::builder()
//!         .with_passthrough_type("Reroute")
//!         .build();
//!
//!     let resolution = resolver.resolve(&workflow);
//!     for diagnostic in &resolution.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//!
//!     println!("{}", resolution.graph.to_json(true)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod resolver;
pub mod store;
pub mod workflow;

#[cfg(feature = "python-bindings")]
mod python;
