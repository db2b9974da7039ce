//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kairo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = JsonStore::new("user/default/workflows");
//! let workflow = store.load_workflow("portrait.json")?;
//!
//! let resolution = Resolver::new().resolve(&workflow);
//! println!("{} nodes, {} diagnostics", resolution.graph.len(), resolution.diagnostics.len());
//! # Ok(())
//! # }
//! ```

// Resolution
pub use crate::resolver::{Classification, Resolution, Resolver, ResolverBuilder};

// Input and output models
pub use crate::graph::{FieldAnnotation, InputValue, NodeRef, ResolvedGraph, ResolvedNode};
pub use crate::workflow::{IntoWorkflow, Link, LinkId, NodeId, NodeInput, Workflow, WorkflowNode};

// Configuration and collaborators
pub use crate::catalog::{EnumerationProvider, SamplerCatalog};
pub use crate::config::{InputSelection, ResolverOptions};
pub use crate::diagnostics::{Diagnostic, DiagnosticKind};
pub use crate::store::JsonStore;

// Error types
pub use crate::error::{ConfigError, ResolveError, StoreError, WorkflowError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
