use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::{DEADEND_COLOR, END_COLOR, NODE_MAX_SIZE, NODE_MIN_SIZE, START_COLOR, WINNING_COLOR};
use crate::state_graph::models::{Node, NodeId, NodeState, StateGraph};

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonData {
    pub nodes: Vec<JsonNode>,
    pub edges: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonNode {
    pub id: usize,
    pub color: String,
    pub size: f32,
    pub table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_label: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEdge {
    pub source: usize,
    pub target: usize,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub label: String,
    pub size: u32,
}

fn channel(color: u32, shift: u32) -> u8 {
    ((color >> shift) & 0xFF) as u8
}

fn lerp(start: u8, end: u8, t: f32) -> u8 {
    (start as f32 * (1.0 - t) + end as f32 * t) as u8
}

fn format_color(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}FF", r, g, b)
}

fn node_color(node: &Node, max_depth: usize) -> String {
    let solid = |color: u32| format_color(channel(color, 24), channel(color, 16), channel(color, 8));
    if node.table.is_won() {
        return solid(WINNING_COLOR);
    }
    if node.state == NodeState::Expanded && node.deadend {
        return solid(DEADEND_COLOR);
    }
    let t = if max_depth == 0 {
        0.0
    } else {
        (node.depth.min(max_depth) as f32) / max_depth as f32
    };
    format_color(
        lerp(channel(START_COLOR, 24), channel(END_COLOR, 24), t),
        lerp(channel(START_COLOR, 16), channel(END_COLOR, 16), t),
        lerp(channel(START_COLOR, 8), channel(END_COLOR, 8), t),
    )
}

fn node_size(node: &Node, max_depth: usize) -> f32 {
    if max_depth == 0 {
        return NODE_MAX_SIZE;
    }
    let remaining = max_depth.saturating_sub(node.depth) as f32;
    NODE_MIN_SIZE + remaining * (NODE_MAX_SIZE - NODE_MIN_SIZE) / max_depth as f32
}

/// Builds the export from one traversal of the graph. Node ids in the output
/// are the traversal order, starting with the root at 0.
pub fn get_json_graph(graph: &StateGraph, max_depth: Option<usize>) -> JsonData {
    let max_depth = max_depth.unwrap_or_else(|| graph.max_depth());
    let order: Vec<(NodeId, &Node)> = graph.iter().collect();
    let export_ids: HashMap<NodeId, usize> = order
        .iter()
        .enumerate()
        .map(|(export_id, &(id, _))| (id, export_id))
        .collect();

    let nodes = order
        .iter()
        .enumerate()
        .map(|(export_id, &(_, node))| {
            let label = if export_id == 0 {
                Some("Start")
            } else if node.table.is_won() {
                Some("Winning")
            } else {
                None
            };
            JsonNode {
                id: export_id,
                color: node_color(node, max_depth),
                size: node_size(node, max_depth),
                table: node.table.to_string(),
                label: label.map(str::to_string),
                force_label: label.map(|_| true),
            }
        })
        .collect();

    let edges = order
        .iter()
        .enumerate()
        .flat_map(|(source, &(_, node))| {
            let export_ids = &export_ids;
            node.edges.iter().filter_map(move |edge| {
                Some(JsonEdge {
                    source,
                    target: *export_ids.get(&edge.to)?,
                    edge_type: "arrow".to_string(),
                    label: edge.mv.abbreviation().to_string(),
                    size: 1,
                })
            })
        })
        .collect();

    JsonData { nodes, edges }
}

pub fn get_json_data(graph: &StateGraph, max_depth: Option<usize>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&get_json_graph(graph, max_depth))
}
