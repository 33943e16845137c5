//! Architecture graph data model.
//!
//! Nodes, edges, and repeat groups produced by the
//! [`mapper`](crate::mapper) and positioned by the
//! [`layout`](crate::layout) engine. Once laid out, a graph is treated as
//! immutable by consumers.

mod edge;
mod group;
mod id;
mod node;

pub use edge::GraphEdge;
pub use group::GraphGroup;
pub use id::{EdgeId, GroupId, IdGen, NodeId};
pub use node::{DetailValue, Details, GraphNode, NodeMetrics, NodePalette, NodeShape, NodeType, Placement};

use serde::{Deserialize, Serialize};

/// A complete architecture diagram: nodes, edges, repeat groups, and overall
/// extents.
///
/// Created empty by the mapper, populated once, then mutated in place by the
/// layout engine to fill in positions and totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitectureGraph {
    /// All nodes, in construction order (which is also layout order).
    pub nodes: Vec<GraphNode>,
    /// Directed edges between nodes.
    pub edges: Vec<GraphEdge>,
    /// Repeat groups bounding runs of nodes.
    pub groups: Vec<GraphGroup>,
    /// Total diagram width after layout, margins included.
    pub total_width: f32,
    /// Total diagram height after layout, margins included.
    pub total_height: f32,
}

impl ArchitectureGraph {
    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
