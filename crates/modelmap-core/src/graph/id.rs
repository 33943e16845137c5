//! Per-build id generation.

use serde::{Deserialize, Serialize};

/// Unique identifier for a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Unique identifier for a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

/// Unique identifier for a graph group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

/// Monotone id source owned by one graph build.
///
/// Nodes, edges, and groups draw from the same sequence, so two builds over
/// the same config replay identical id assignments. Each build owns its own
/// generator; nothing is shared across concurrent builds.
#[derive(Debug, Default)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    /// Fresh generator starting at 1.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// Next node id.
    pub fn node(&mut self) -> NodeId {
        NodeId(self.bump())
    }

    /// Next edge id.
    pub fn edge(&mut self) -> EdgeId {
        EdgeId(self.bump())
    }

    /// Next group id.
    pub fn group(&mut self) -> GroupId {
        GroupId(self.bump())
    }
}
