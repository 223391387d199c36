use crate::state_graph::models::{NodeState, PopulateStats, StateGraph};
use crate::state_graph::petgraph_interface::GraphShape;

pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub expanded: usize,
    pub deadends: usize,
    pub max_depth: usize,
    pub percent_expanded: f64,
}

impl GraphInfo {
    pub fn new(graph: &StateGraph) -> Self {
        let nodes = graph.len();
        let expanded = graph
            .nodes()
            .iter()
            .filter(|node| node.state == NodeState::Expanded)
            .count();
        let deadends = graph
            .nodes()
            .iter()
            .filter(|node| node.state == NodeState::Expanded && node.deadend)
            .count();
        let percent_expanded = if nodes > 0 {
            (expanded as f64 / nodes as f64) * 100.0
        } else {
            0.0
        };
        Self {
            nodes,
            edges: graph.edge_count(),
            expanded,
            deadends,
            max_depth: graph.max_depth(),
            percent_expanded,
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Graph has {} nodes, {} edges, {} expanded nodes ({:.1}%), {} unexpanded, {} dead ends, max depth {}.",
            self.nodes,
            self.edges,
            self.expanded,
            self.percent_expanded,
            self.nodes - self.expanded,
            self.deadends,
            self.max_depth
        )
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "nodes: {}, edges: {}, expanded: {}, depth: {}",
            self.nodes, self.edges, self.expanded, self.max_depth
        )
    }
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    let shape = GraphShape::new(graph);
    format!(
        "{}\n{} strongly connected components, {}.",
        GraphInfo::new(graph).to_human_string(),
        shape.strongly_connected_components,
        if shape.has_cycles { "contains cycles" } else { "acyclic" }
    )
}

pub fn describe_populate(stats: &PopulateStats) -> String {
    let seconds = stats.elapsed.as_secs_f64();
    let rate = if seconds > 0.0 {
        stats.nodes_expanded as f64 / seconds
    } else {
        0.0
    };
    format!(
        "Stopped with {:?} after {:?}: {} nodes and {} edges created, {} nodes expanded ({:.1} nodes/sec).",
        stats.result, stats.elapsed, stats.nodes_created, stats.edges_created, stats.nodes_expanded, rate
    )
}
