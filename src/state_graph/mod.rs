mod console_interface;
mod graph;
mod iter;
mod json_export;
mod models;
mod petgraph_interface;
mod populate;
mod walk;

pub use console_interface::{describe_populate, get_graph_info, GraphInfo};
pub use graph::ROOT_ID;
pub use iter::GraphIter;
pub use json_export::{get_json_data, get_json_graph, JsonData, JsonEdge, JsonNode};
pub use models::{Edge, GenerateLimits, Node, NodeId, NodeState, PopulateResult, PopulateStats, StateGraph};
pub use petgraph_interface::{convert_to_petgraph, GraphShape};
pub use walk::{random_walk, Walk};
