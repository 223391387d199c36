use std::collections::HashMap;
use crate::core::{Move, Table};
use crate::state_graph::models::{Edge, Node, NodeId, NodeState, StateGraph};

pub const ROOT_ID: NodeId = 0;

impl StateGraph {
    pub fn new(root: Table) -> Self {
        let mut graph = StateGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        };
        graph.upsert_state(root, 0);
        graph
    }

    pub fn root(&self) -> NodeId {
        ROOT_ID
    }

    /// Returns the node holding `table`, creating it at `depth` if the table is
    /// new. The flag is true when a node was created.
    pub fn upsert_state(&mut self, table: Table, depth: usize) -> (NodeId, bool) {
        if let Some(&id) = self.index.get(&table) {
            return (id, false);
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            table,
            depth,
            state: NodeState::Discovered,
            deadend: true,
            edges: Vec::new(),
        });
        self.index.insert(table, id);
        (id, true)
    }

    pub fn find(&self, table: &Table) -> Option<NodeId> {
        self.index.get(table).copied()
    }

    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.nodes.iter().flat_map(|node| node.edges.iter())
    }

    /// Records `from --mv--> to`. An edge for the same source and move is only
    /// ever stored once; returns false if it already existed.
    pub fn add_edge(&mut self, from: NodeId, mv: Move, to: NodeId) -> bool {
        assert!(to < self.nodes.len(), "edge target {} is not a node", to);
        let node = &mut self.nodes[from];
        if node.edges.iter().any(|edge| edge.mv == mv) {
            return false;
        }
        node.edges.push(Edge { mv, from, to });
        node.deadend = false;
        self.edge_count += 1;
        true
    }

    pub fn mark_expanded(&mut self, id: NodeId) {
        self.nodes[id].state = NodeState::Expanded;
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    pub fn unexpanded_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.state == NodeState::Discovered)
            .count()
    }
}
