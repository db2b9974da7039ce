use crate::catalog::{EnumerationProvider, SamplerCatalog};
use crate::config::{InputSelection, ResolverOptions};
use crate::diagnostics::Diagnostic;
use crate::error::WorkflowError;
use crate::graph::ResolvedGraph;
use crate::workflow::{IntoWorkflow, Workflow};

mod builder;
pub mod classify;
pub mod source;
pub mod widgets;

use builder::GraphBuilder;
pub use builder::{SAMPLER_INPUT, SCHEDULER_INPUT, display_title};
pub use classify::{Classification, is_passthrough_node};
pub use source::SourceResolver;

/// The output of a resolution: the graph plus every non-fatal diagnostic
/// raised while building it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub graph: ResolvedGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Flattens editor workflows into resolved graphs.
///
/// A `Resolver` holds only configuration, so one instance can serve many
/// documents, including from several threads at once.
pub struct Resolver {
    options: ResolverOptions,
    catalog: Box<dyn EnumerationProvider>,
}

pub struct ResolverBuilder {
    options: ResolverOptions,
    catalog: Option<Box<dyn EnumerationProvider>>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            options: ResolverOptions::default(),
            catalog: None,
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Supplies the sampler/scheduler catalog. Takes precedence over
    /// `ResolverOptions::catalog`.
    pub fn with_catalog(mut self, catalog: impl EnumerationProvider + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn with_passthrough_type(mut self, type_name: &str) -> Self {
        if !self.options.passthrough_types.iter().any(|t| t == type_name) {
            self.options.passthrough_types.push(type_name.to_string());
        }
        self
    }

    pub fn with_disabled_mode(mut self, mode: i64) -> Self {
        if !self.options.disabled_modes.contains(&mode) {
            self.options.disabled_modes.push(mode);
        }
        self
    }

    pub fn with_input_selection(mut self, selection: InputSelection) -> Self {
        self.options.input_selection = selection;
        self
    }

    pub fn build(self) -> Resolver {
        let catalog: Box<dyn EnumerationProvider> = match self.catalog {
            Some(catalog) => catalog,
            None => Box::new(
                self.options
                    .catalog
                    .clone()
                    .unwrap_or_else(SamplerCatalog::default),
            ),
        };
        Resolver {
            options: self.options,
            catalog,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn classify(&self, workflow: &Workflow) -> Classification {
        Classification::classify(&workflow.nodes, &self.options)
    }

    /// Resolves a workflow into an execution-ready graph.
    ///
    /// Never fails: inputs that cannot be determined are dropped and reported
    /// in [`Resolution::diagnostics`].
    pub fn resolve(&self, workflow: &Workflow) -> Resolution {
        let classification = self.classify(workflow);
        let builder = GraphBuilder::new(workflow, &classification, &self.options, &*self.catalog);
        let (graph, diagnostics) = builder.build();

        log::debug!(
            "Resolved workflow: {} real, {} pass-through, {} emitted, {} diagnostics",
            classification.real_count(),
            classification.passthrough_count(),
            graph.len(),
            diagnostics.len()
        );

        Resolution { graph, diagnostics }
    }

    /// Decodes a document and resolves it.
    pub fn resolve_document(
        &self,
        document: impl IntoWorkflow,
    ) -> Result<Resolution, WorkflowError> {
        let workflow = document.into_workflow()?;
        Ok(self.resolve(&workflow))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a workflow with default options and the built-in catalog.
pub fn resolve(workflow: &Workflow) -> Resolution {
    Resolver::new().resolve(workflow)
}
