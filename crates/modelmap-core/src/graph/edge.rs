//! Graph edges.

use super::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
///
/// Dashed edges model residual/skip connections; the renderer draws them
/// without an arrowhead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique id within the graph.
    pub id: EdgeId,
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Optional text drawn along the edge.
    pub label: Option<String>,
    /// Dashed stroke, no arrowhead.
    pub dashed: bool,
}
