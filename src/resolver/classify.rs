use crate::config::ResolverOptions;
use crate::workflow::{NodeId, WorkflowNode};
use ahash::AHashSet;

/// True if the node only exists for visual organization and must be elided:
/// it is bypassed, or it is of a pass-through type such as a reroute.
pub fn is_passthrough_node(node: &WorkflowNode, options: &ResolverOptions) -> bool {
    node.mode.is_some_and(|mode| options.disabled_modes.contains(&mode))
        || options.passthrough_types.iter().any(|t| *t == node.node_type)
}

/// Disjoint partition of node ids into pass-through and real nodes.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    passthrough: AHashSet<NodeId>,
    real: AHashSet<NodeId>,
}

impl Classification {
    /// Partitions the nodes. An id declared by both a real and a pass-through
    /// node counts as real.
    pub fn classify(nodes: &[WorkflowNode], options: &ResolverOptions) -> Self {
        let mut passthrough = AHashSet::new();
        let mut real = AHashSet::new();
        for node in nodes {
            if is_passthrough_node(node, options) {
                passthrough.insert(node.id.clone());
            } else {
                real.insert(node.id.clone());
            }
        }
        passthrough.retain(|id| !real.contains(id));
        Self { passthrough, real }
    }

    pub fn is_real(&self, id: &NodeId) -> bool {
        self.real.contains(id)
    }

    pub fn is_passthrough(&self, id: &NodeId) -> bool {
        self.passthrough.contains(id)
    }

    pub fn real_count(&self) -> usize {
        self.real.len()
    }

    pub fn passthrough_count(&self) -> usize {
        self.passthrough.len()
    }

    pub fn passthrough_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.passthrough.iter()
    }
}
