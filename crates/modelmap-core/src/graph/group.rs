//! Repeat groups.

use super::id::{GroupId, NodeId};
use serde::{Deserialize, Serialize};

/// A visual bounding region around a run of nodes that repeats.
///
/// One materialized block stands in for `repeat_count` stacked copies
/// ("Transformer Block × 32"). The rectangle is derived from member node
/// positions by the layout engine; `x` is the box center while `y` is its
/// top edge, matching how the label chip hangs off the top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphGroup {
    /// Unique id within the graph.
    pub id: GroupId,
    /// Display label.
    pub label: String,
    /// Member nodes, in construction order.
    pub node_ids: Vec<NodeId>,
    /// How many times the block repeats (≥ 1).
    pub repeat_count: u64,
    /// Center x of the bounding box.
    pub x: f32,
    /// Top y of the bounding box.
    pub y: f32,
    /// Bounding box width, padding included.
    pub width: f32,
    /// Bounding box height, padding included.
    pub height: f32,
}
