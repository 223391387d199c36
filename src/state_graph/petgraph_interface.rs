use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use crate::core::Move;
use crate::state_graph::models::{NodeId, StateGraph};

/// Copies the graph into petgraph. Node weights are the ids used by
/// `StateGraph`, and `NodeIndex::new(id)` addresses the same node.
pub fn convert_to_petgraph(graph: &StateGraph) -> DiGraph<NodeId, Move> {
    let mut petgraph = DiGraph::with_capacity(graph.len(), graph.edge_count());
    for id in 0..graph.len() {
        petgraph.add_node(id);
    }
    for edge in graph.edges() {
        petgraph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), edge.mv);
    }
    petgraph
}

pub struct GraphShape {
    pub has_cycles: bool,
    pub strongly_connected_components: usize,
}

impl GraphShape {
    pub fn new(graph: &StateGraph) -> Self {
        let petgraph = convert_to_petgraph(graph);
        GraphShape {
            has_cycles: is_cyclic_directed(&petgraph),
            strongly_connected_components: tarjan_scc(&petgraph).len(),
        }
    }
}
