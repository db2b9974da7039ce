use crate::workflow::{LinkId, NodeId};
use thiserror::Error;

/// Errors that can occur while decoding a raw workflow document.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Workflow document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Reasons a single link could not be traced back to a real producing node.
///
/// These never abort a resolution; the affected input is dropped and the
/// error is carried inside a [`crate::diagnostics::Diagnostic`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("link {0} does not exist in the workflow")]
    LinkNotFound(LinkId),

    #[error("link {link_id} originates from node '{node_id}', which is not in the workflow")]
    SourceNodeMissing { link_id: LinkId, node_id: NodeId },

    #[error("pass-through node '{node_id}' has no linked input to follow")]
    NoLinkedInput { node_id: NodeId },

    #[error("link {0} loops back through pass-through nodes")]
    CyclicPassthrough(LinkId),
}

/// Errors raised by [`crate::store::JsonStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid file name '{0}': must be a .json file")]
    InvalidFileName(String),

    #[error("Access denied: '{0}' resolves outside the store root")]
    PathEscapesRoot(String),

    #[error("'{0}' does not exist")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored workflow is invalid: {0}")]
    Workflow(#[from] WorkflowError),
}

/// Errors raised while loading [`crate::config::ResolverOptions`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read options file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}
