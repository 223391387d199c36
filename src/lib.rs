// Reachable state graph of a Klondike deal.
// Tables are packed into fixed index arrays (`core::Table`), moves mutate them
// in place (`core::Move`), and `state_graph::StateGraph` links every distinct
// table reached from the deal.

pub mod console_interface;
pub mod core;
pub mod state_graph;
