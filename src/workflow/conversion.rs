use super::definition::Workflow;
use crate::error::WorkflowError;

/// A trait for anything that can be turned into a raw [`Workflow`].
///
/// The resolver only ever sees a decoded `Workflow`; this trait is the seam
/// where callers plug in their own document source. JSON text and parsed
/// `serde_json::Value`s are supported out of the box.
///
/// # Example
///
/// ```rust,no_run
/// use kairo::prelude::*;
///
/// struct SavedFile { contents: String }
///
/// impl IntoWorkflow for SavedFile {
///     fn into_workflow(self) -> std::result::Result<Workflow, WorkflowError> {
///         Workflow::from_json(&self.contents)
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and decodes it into a workflow.
    fn into_workflow(self) -> Result<Workflow, WorkflowError>;
}

impl IntoWorkflow for Workflow {
    fn into_workflow(self) -> Result<Workflow, WorkflowError> {
        Ok(self)
    }
}

impl IntoWorkflow for &str {
    fn into_workflow(self) -> Result<Workflow, WorkflowError> {
        Workflow::from_json(self)
    }
}

impl IntoWorkflow for serde_json::Value {
    fn into_workflow(self) -> Result<Workflow, WorkflowError> {
        Workflow::from_value(self)
    }
}
