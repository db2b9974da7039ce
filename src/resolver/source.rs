use super::classify::Classification;
use crate::config::InputSelection;
use crate::error::ResolveError;
use crate::graph::NodeRef;
use crate::workflow::{Link, LinkId, NodeId, Workflow, WorkflowNode};
use ahash::{AHashMap, AHashSet};

/// Walks links backwards through pass-through nodes to the nearest real producer.
pub struct SourceResolver<'a> {
    links: AHashMap<LinkId, &'a Link>,
    nodes: AHashMap<&'a NodeId, &'a WorkflowNode>,
    classification: &'a Classification,
    selection: InputSelection,
}

impl<'a> SourceResolver<'a> {
    pub fn new(
        workflow: &'a Workflow,
        classification: &'a Classification,
        selection: InputSelection,
    ) -> Self {
        let mut links = AHashMap::with_capacity(workflow.links.len());
        for link in &workflow.links {
            links.entry(link.id).or_insert(link);
        }
        let mut nodes = AHashMap::with_capacity(workflow.nodes.len());
        for node in &workflow.nodes {
            if classification.is_passthrough(&node.id) {
                nodes.entry(&node.id).or_insert(node);
            }
        }
        Self {
            links,
            nodes,
            classification,
            selection,
        }
    }

    /// Resolves a link to the real node and output slot that ultimately feed it.
    ///
    /// Every link id is visited at most once per call, so a loop through
    /// pass-through nodes ends in [`ResolveError::CyclicPassthrough`].
    pub fn resolve(&self, link_id: LinkId) -> Result<NodeRef, ResolveError> {
        let mut visited = AHashSet::new();
        let mut current = link_id;
        loop {
            if !visited.insert(current) {
                return Err(ResolveError::CyclicPassthrough(link_id));
            }
            let link = self
                .links
                .get(&current)
                .ok_or(ResolveError::LinkNotFound(current))?;

            if self.classification.is_real(&link.origin_id) {
                return Ok(NodeRef::new(link.origin_id.clone(), link.origin_slot));
            }

            let node = self.nodes.get(&link.origin_id).ok_or_else(|| {
                ResolveError::SourceNodeMissing {
                    link_id: current,
                    node_id: link.origin_id.clone(),
                }
            })?;

            current = self
                .upstream_link(node, link.link_type.as_deref())
                .ok_or_else(|| ResolveError::NoLinkedInput {
                    node_id: node.id.clone(),
                })?;
        }
    }

    /// Picks the input of a pass-through node to follow upstream.
    fn upstream_link(&self, node: &WorkflowNode, carried_type: Option<&str>) -> Option<LinkId> {
        let mut linked = node
            .inputs
            .iter()
            .filter_map(|input| input.link.map(|link| (input, link)));

        match self.selection {
            InputSelection::FirstLinked => linked.next().map(|(_, link)| link),
            InputSelection::TypeMatched => {
                let candidates: Vec<_> = linked.collect();
                carried_type
                    .and_then(|wanted| {
                        candidates
                            .iter()
                            .find(|(input, _)| input.type_name() == Some(wanted))
                    })
                    .or_else(|| candidates.first())
                    .map(|(_, link)| *link)
            }
        }
    }
}
