use crate::error::ResolveError;
use crate::workflow::NodeId;
use itertools::Itertools;
use log::Level;
use std::fmt;
use thiserror::Error;

/// What went wrong with a single input or node during resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("no valid source found, input dropped: {0}")]
    UnresolvedInput(#[from] ResolveError),

    #[error("no widget value left at position {position} after filtering, input dropped")]
    WidgetValuesExhausted { position: usize },

    #[error("value is a mapping holding a list, input dropped")]
    DiscardedValueShape,

    #[error("input name collides with a reserved key, input dropped")]
    ReservedInputName,

    #[error("node id already emitted, duplicate node skipped")]
    DuplicateNode,
}

impl DiagnosticKind {
    pub fn level(&self) -> Level {
        match self {
            DiagnosticKind::DiscardedValueShape => Level::Info,
            _ => Level::Warn,
        }
    }
}

/// A non-fatal note produced while resolving a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub node_id: NodeId,
    pub input: Option<String>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn for_input(node_id: &NodeId, input: &str, kind: impl Into<DiagnosticKind>) -> Self {
        Self {
            node_id: node_id.clone(),
            input: Some(input.to_string()),
            kind: kind.into(),
        }
    }

    pub fn for_node(node_id: &NodeId, kind: DiagnosticKind) -> Self {
        Self {
            node_id: node_id.clone(),
            input: None,
            kind,
        }
    }

    pub fn level(&self) -> Level {
        self.kind.level()
    }

    pub fn is_warning(&self) -> bool {
        self.level() == Level::Warn
    }

    /// Forwards the diagnostic to the `log` facade at its level.
    pub fn emit(&self) {
        log::log!(target: "kairo::resolver", self.level(), "{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.input {
            Some(input) => write!(f, "node {} input '{}': {}", self.node_id, input, self.kind),
            None => write!(f, "node {}: {}", self.node_id, self.kind),
        }
    }
}

/// Collects diagnostics and forwards each one to the log as it arrives.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.entries.push(diagnostic);
    }

    pub(crate) fn into_inner(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// One line per diagnostic, for tools that print a report.
pub fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter().map(|d| format!("[{}] {}", d.level(), d)).join("\n")
}
