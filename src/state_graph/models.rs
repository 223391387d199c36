use std::collections::HashMap;
use std::time::Duration;
use crate::core::{Move, Table};

pub type NodeId = usize;

pub struct StateGraph {
    pub(super) nodes: Vec<Node>,
    // dedup index: one node per distinct table
    pub(super) index: HashMap<Table, NodeId>,
    pub(super) edge_count: usize,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum NodeState {
    #[default]
    Discovered,
    Expanded,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub table: Table,
    /// BFS: shortest distance from the root. DFS: length of the path it was found on.
    pub depth: usize,
    pub state: NodeState,
    /// No outgoing edges yet. Either a real dead end or simply not expanded.
    pub deadend: bool,
    pub edges: Vec<Edge>,
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct Edge {
    pub mv: Move,
    pub from: NodeId,
    pub to: NodeId,
}

/// Budget for one generation call. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateLimits {
    pub max_depth: Option<usize>,
    pub max_nodes: Option<usize>,
    pub timeout: Option<Duration>,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum PopulateResult {
    /// Nothing left to expand within the depth limit.
    AllVisited,
    /// Depth-first search reached a won table.
    FoundWin,
    NodeLimitReached,
    TimedOut,
}

#[derive(Debug, Clone, Copy)]
pub struct PopulateStats {
    pub result: PopulateResult,
    pub nodes_created: usize,
    pub edges_created: usize,
    pub nodes_expanded: usize,
    pub elapsed: Duration,
}
