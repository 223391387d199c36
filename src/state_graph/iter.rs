use std::collections::{HashSet, VecDeque};
use crate::state_graph::models::{Node, NodeId, StateGraph};

/// Breadth-first walk over the nodes reachable from the root. Every node is
/// yielded once, however many edges lead to it. Cloning gives an independent
/// cursor that resumes from the same position.
#[derive(Clone)]
pub struct GraphIter<'a> {
    graph: &'a StateGraph,
    queue: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a> GraphIter<'a> {
    fn new(graph: &'a StateGraph) -> Self {
        let root = graph.root();
        GraphIter {
            graph,
            queue: VecDeque::from([root]),
            visited: HashSet::from([root]),
        }
    }
}

impl<'a> Iterator for GraphIter<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.graph.node(id);
        for edge in &node.edges {
            if self.visited.insert(edge.to) {
                self.queue.push_back(edge.to);
            }
        }
        Some((id, node))
    }
}

impl StateGraph {
    pub fn iter(&self) -> GraphIter<'_> {
        GraphIter::new(self)
    }
}

impl<'a> IntoIterator for &'a StateGraph {
    type Item = (NodeId, &'a Node);
    type IntoIter = GraphIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
