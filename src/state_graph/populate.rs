use std::collections::{HashSet, VecDeque};
use std::time::Instant;
use tracing::{debug, info};
use crate::core::{generate_moves, rank_moves, MoveRanker, PROGRESS_LOG_INTERVAL};
use crate::state_graph::console_interface::GraphInfo;
use crate::state_graph::models::{
    GenerateLimits, NodeId, NodeState, PopulateResult, PopulateStats, StateGraph,
};

struct Budget {
    limits: GenerateLimits,
    start: Instant,
}

impl Budget {
    fn start(limits: &GenerateLimits) -> Self {
        Budget { limits: *limits, start: Instant::now() }
    }

    fn may_expand_at(&self, depth: usize) -> bool {
        self.limits.max_depth.is_none_or(|max| depth < max)
    }

    fn exhausted(&self, node_count: usize) -> Option<PopulateResult> {
        if self.limits.max_nodes.is_some_and(|max| node_count >= max) {
            return Some(PopulateResult::NodeLimitReached);
        }
        if self.limits.timeout.is_some_and(|timeout| self.start.elapsed() >= timeout) {
            return Some(PopulateResult::TimedOut);
        }
        None
    }
}

struct Progress {
    nodes_before: usize,
    edges_before: usize,
    nodes_expanded: usize,
}

impl Progress {
    fn new(graph: &StateGraph) -> Self {
        Progress {
            nodes_before: graph.len(),
            edges_before: graph.edge_count(),
            nodes_expanded: 0,
        }
    }

    fn expanded(&mut self, graph: &StateGraph) {
        self.nodes_expanded += 1;
        if self.nodes_expanded % PROGRESS_LOG_INTERVAL == 0 {
            info!("{}", GraphInfo::new(graph).to_log_string());
        }
    }

    fn finish(self, graph: &StateGraph, budget: &Budget, result: PopulateResult) -> PopulateStats {
        let stats = PopulateStats {
            result,
            nodes_created: graph.len() - self.nodes_before,
            edges_created: graph.edge_count() - self.edges_before,
            nodes_expanded: self.nodes_expanded,
            elapsed: budget.start.elapsed(),
        };
        debug!(?stats, "generation stopped");
        stats
    }
}

impl StateGraph {
    /// Generates every successor of `id` and links them, creating nodes for
    /// tables that have not been seen before at `depth + 1`.
    pub fn populate_node(&mut self, id: NodeId) {
        let table = self.nodes[id].table;
        let depth = self.nodes[id].depth;
        for mv in generate_moves(&table, None) {
            let (to, _) = self.upsert_state(table.with_move(mv), depth + 1);
            self.add_edge(id, mv, to);
        }
        self.mark_expanded(id);
    }

    /// Breadth-first expansion from the root. Nodes expanded by an earlier call
    /// are walked through their recorded edges, so calling again with a larger
    /// budget continues from the previous frontier.
    pub fn generate_bfs(&mut self, limits: &GenerateLimits) -> PopulateStats {
        let budget = Budget::start(limits);
        let mut progress = Progress::new(self);

        let root = self.root();
        let mut queue: VecDeque<(usize, NodeId)> = VecDeque::from([(0, root)]);
        let mut queued: HashSet<NodeId> = HashSet::from([root]);

        let result = loop {
            let Some((depth, id)) = queue.pop_front() else {
                break PopulateResult::AllVisited;
            };
            // depths leave the queue in non-decreasing order
            if !budget.may_expand_at(depth) {
                break PopulateResult::AllVisited;
            }

            if self.nodes[id].state == NodeState::Discovered {
                if let Some(reason) = budget.exhausted(self.len()) {
                    break reason;
                }
                self.populate_node(id);
                progress.expanded(self);
            }

            for edge in &self.nodes[id].edges {
                if queued.insert(edge.to) {
                    queue.push_back((depth + 1, edge.to));
                }
            }
        };

        progress.finish(self, &budget, result)
    }

    /// Greedy single-path expansion. Each step links every already-known
    /// successor and descends into the best-ranked unknown one only. The path
    /// ends at a won table, at the depth limit, or at a node whose successors
    /// are all known already; there is no backtracking.
    pub fn generate_dfs<R: MoveRanker + ?Sized>(
        &mut self,
        ranker: &R,
        limits: &GenerateLimits,
    ) -> PopulateStats {
        let budget = Budget::start(limits);
        let mut progress = Progress::new(self);
        let mut stack = vec![self.root()];

        let result = loop {
            // the stack only ever holds the head of the path
            let Some(id) = stack.pop() else {
                break PopulateResult::AllVisited;
            };
            let table = self.nodes[id].table;
            if table.is_won() {
                break PopulateResult::FoundWin;
            }
            let depth = self.nodes[id].depth;
            if !budget.may_expand_at(depth) {
                continue;
            }
            if let Some(reason) = budget.exhausted(self.len()) {
                break reason;
            }

            let moves = rank_moves(ranker, &table, &generate_moves(&table, None));
            let mut descend = None;
            for mv in moves {
                let next = table.with_move(mv);
                match self.find(&next) {
                    Some(to) => {
                        self.add_edge(id, mv, to);
                    }
                    None if descend.is_none() => descend = Some((mv, next)),
                    None => {}
                }
            }

            if self.nodes[id].state == NodeState::Discovered {
                self.mark_expanded(id);
                progress.expanded(self);
            }

            if let Some((mv, next)) = descend {
                let (to, _) = self.upsert_state(next, depth + 1);
                self.add_edge(id, mv, to);
                stack.push(to);
            }
        };

        progress.finish(self, &budget, result)
    }
}
