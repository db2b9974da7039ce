use super::classify::{Classification, is_passthrough_node};
use super::source::SourceResolver;
use super::widgets::{filter_widget_values, widget_input_names};
use crate::catalog::EnumerationProvider;
use crate::config::ResolverOptions;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLog};
use crate::graph::{FieldAnnotation, InputValue, ResolvedGraph, ResolvedNode, is_reserved_key};
use crate::workflow::{NodeId, NodeInput, Workflow, WorkflowNode};
use ahash::AHashSet;
use serde_json::Value;
use std::borrow::Cow;

pub const SAMPLER_INPUT: &str = "sampler_name";
pub const SCHEDULER_INPUT: &str = "scheduler";

/// Assembles the resolved graph: one entry per real node.
pub(super) struct GraphBuilder<'a> {
    workflow: &'a Workflow,
    options: &'a ResolverOptions,
    catalog: &'a dyn EnumerationProvider,
    sources: SourceResolver<'a>,
    diagnostics: DiagnosticLog,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(
        workflow: &'a Workflow,
        classification: &'a Classification,
        options: &'a ResolverOptions,
        catalog: &'a dyn EnumerationProvider,
    ) -> Self {
        Self {
            workflow,
            options,
            catalog,
            sources: SourceResolver::new(workflow, classification, options.input_selection),
            diagnostics: DiagnosticLog::default(),
        }
    }

    pub(super) fn build(mut self) -> (ResolvedGraph, Vec<Diagnostic>) {
        let workflow = self.workflow;
        let mut graph = ResolvedGraph::new();
        let mut emitted: AHashSet<&NodeId> = AHashSet::new();

        for node in &workflow.nodes {
            if is_passthrough_node(node, self.options) {
                continue;
            }
            if !emitted.insert(&node.id) {
                self.diagnostics
                    .push(Diagnostic::for_node(&node.id, DiagnosticKind::DuplicateNode));
                continue;
            }
            let entry = self.build_node(node);
            graph.push(entry);
        }

        (graph, self.diagnostics.into_inner())
    }

    fn build_node(&mut self, node: &WorkflowNode) -> ResolvedNode {
        let mut entry = ResolvedNode::new(node.id.clone(), &node.node_type);
        entry.meta.title = display_title(node);

        let widget_names = widget_input_names(node);
        let widget_values = filter_widget_values(node.widget_values(), self.options);

        for input in &node.inputs {
            if is_reserved_key(&input.name) {
                self.diagnostics.push(Diagnostic::for_input(
                    &node.id,
                    &input.name,
                    DiagnosticKind::ReservedInputName,
                ));
                continue;
            }

            let value = self.resolve_input(node, input, &widget_names, &widget_values);

            if let Some(value) = value {
                if self.options.discard_nested_list_values && value.is_mapping_with_list() {
                    self.diagnostics.push(Diagnostic::for_input(
                        &node.id,
                        &input.name,
                        DiagnosticKind::DiscardedValueShape,
                    ));
                    continue;
                }
                entry.inputs.insert(&input.name, value);
            }

            if let Some(display) = input.display_name() {
                entry
                    .localized_names
                    .push(FieldAnnotation::new(&input.name, display));
            }
            if input.is_widget() {
                if let Some(input_type) = &input.input_type {
                    entry
                        .types
                        .push(FieldAnnotation::new(&input.name, input_type.clone()));
                }
            }
        }

        if node.has_input(SAMPLER_INPUT) {
            entry.samplers = Some(self.catalog.samplers().to_vec());
        }
        if node.has_input(SCHEDULER_INPUT) {
            entry.schedulers = Some(self.catalog.schedulers().to_vec());
        }

        entry
    }

    /// A linked input resolves to its producer; an unlinked widget input takes
    /// the filtered widget value at its position among the widget inputs.
    fn resolve_input(
        &mut self,
        node: &WorkflowNode,
        input: &NodeInput,
        widget_names: &[&str],
        widget_values: &[&Value],
    ) -> Option<InputValue> {
        if let Some(link_id) = input.link {
            return match self.sources.resolve(link_id) {
                Ok(source) => Some(InputValue::Link(source)),
                Err(err) => {
                    self.diagnostics
                        .push(Diagnostic::for_input(&node.id, &input.name, err));
                    None
                }
            };
        }

        if !input.is_widget() {
            return None;
        }

        let position = widget_names.iter().position(|name| *name == input.name)?;
        match widget_values.get(position) {
            Some(value) => Some(InputValue::Literal((*value).clone())),
            None => {
                self.diagnostics.push(Diagnostic::for_input(
                    &node.id,
                    &input.name,
                    DiagnosticKind::WidgetValuesExhausted { position },
                ));
                None
            }
        }
    }
}

/// The explicit title, else the search-and-replace name, else the node type.
/// An empty result means no title.
pub fn display_title(node: &WorkflowNode) -> Option<String> {
    let title = match &node.title {
        Some(title) => Cow::Borrowed(title.as_str()),
        None => node
            .fallback_name()
            .unwrap_or(Cow::Borrowed(node.node_type.as_str())),
    };
    (!title.is_empty()).then(|| title.into_owned())
}
