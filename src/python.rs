use crate::catalog::{EnumerationProvider, SamplerCatalog};
use crate::config::ResolverOptions;
use crate::resolver::Resolver;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn convert_with(resolver: &Resolver, workflow_json: &str) -> PyResult<String> {
    let resolution = resolver.resolve_document(workflow_json).map_err(value_error)?;
    resolution.graph.to_json(false).map_err(value_error)
}

/// A reusable workflow resolver.
///
/// Resolving with the same instance repeatedly avoids re-reading options.
#[pyclass(name = "WorkflowResolver")]
struct WorkflowResolverPy {
    resolver: Resolver,
}

#[pymethods]
impl WorkflowResolverPy {
    /// Creates a resolver.
    ///
    /// Args:
    ///     options_json (str | None): JSON object of resolver options, e.g.
    ///         `{"passthrough_types": ["Reroute"], "disabled_modes": [4]}`.
    ///         Missing keys take their defaults.
    ///
    /// Raises:
    ///     ValueError: If the options are not valid JSON or contain unknown keys.
    #[new]
    #[pyo3(signature = (options_json=None))]
    fn new(options_json: Option<&str>) -> PyResult<Self> {
        let options = match options_json {
            Some(json) => ResolverOptions::from_json(json).map_err(value_error)?,
            None => ResolverOptions::default(),
        };
        let resolver = Resolver::builder().with_options(options).build();
        Ok(WorkflowResolverPy { resolver })
    }

    /// Converts a saved workflow into the prompt format.
    ///
    /// Args:
    ///     workflow_json (str): The workflow as saved by the editor.
    ///
    /// Returns:
    ///     str: The resolved graph as JSON, keyed by node id.
    ///
    /// Raises:
    ///     ValueError: If the workflow is not a valid JSON object.
    fn convert(&self, workflow_json: &str) -> PyResult<String> {
        convert_with(&self.resolver, workflow_json)
    }
}

/// Converts a saved workflow into the prompt format.
///
/// Args:
///     workflow_json (str): The workflow as saved by the editor.
///     samplers (list[str] | None): The host's sampler names; defaults to the
///         built-in list.
///     schedulers (list[str] | None): The host's scheduler names; defaults to
///         the built-in list.
///
/// Returns:
///     str: The resolved graph as JSON, keyed by node id.
#[pyfunction]
#[pyo3(signature = (workflow_json, samplers=None, schedulers=None))]
fn convert_workflow(
    workflow_json: &str,
    samplers: Option<Vec<String>>,
    schedulers: Option<Vec<String>>,
) -> PyResult<String> {
    let defaults = SamplerCatalog::default();
    let catalog = SamplerCatalog::new(
        samplers.unwrap_or_else(|| defaults.samplers().to_vec()),
        schedulers.unwrap_or_else(|| defaults.schedulers().to_vec()),
    );
    let resolver = Resolver::builder().with_catalog(catalog).build();
    convert_with(&resolver, workflow_json)
}

/// Flattens node-editor workflows into execution-ready prompt graphs.
#[pymodule]
fn kairo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<WorkflowResolverPy>()?;
    m.add_function(wrap_pyfunction!(convert_workflow, m)?)?;
    Ok(())
}
