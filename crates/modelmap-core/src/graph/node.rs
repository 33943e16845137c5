//! Graph nodes and the per-type sizing table.

use super::id::NodeId;
use serde::{Deserialize, Serialize};

/// Semantic kind of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Token id input.
    Input,
    /// Token embedding table.
    Embedding,
    /// Normalization layer.
    Norm,
    /// Attention block.
    Attention,
    /// Dense feed-forward block.
    Mlp,
    /// MoE routing gate.
    MoeRouter,
    /// One MoE expert (or the elision placeholder).
    MoeExpert,
    /// Final vocabulary projection.
    LmHead,
    /// Output logits.
    Output,
    /// Residual add / combine marker.
    Residual,
}

/// Shape drawn for a node by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// Rounded rectangle with a colored header.
    Card,
    /// Pill for input/output terminals.
    Pill,
    /// Small circle for residual markers.
    Dot,
}

/// Color family a node belongs to. The renderer maps these to theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodePalette {
    /// Attention blocks.
    Attention,
    /// Feed-forward blocks and experts.
    Mlp,
    /// Normalization layers.
    Norm,
    /// Embedding table.
    Embedding,
    /// MoE router.
    Moe,
    /// Terminals, LM head, residual markers.
    Io,
}

/// Fixed visual parameters for one node type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMetrics {
    /// Node width.
    pub width: f32,
    /// Node height.
    pub height: f32,
    /// Shape kind.
    pub shape: NodeShape,
    /// Color family.
    pub palette: NodePalette,
}

const BLOCK: NodeMetrics = NodeMetrics {
    width: 200.0,
    height: 48.0,
    shape: NodeShape::Card,
    palette: NodePalette::Mlp,
};

const TERMINAL: NodeMetrics = NodeMetrics {
    width: 160.0,
    height: 32.0,
    shape: NodeShape::Pill,
    palette: NodePalette::Io,
};

impl NodeType {
    /// Visual parameters for this node type. Consulted once at node
    /// creation; layout never changes sizes.
    pub fn metrics(&self) -> NodeMetrics {
        match self {
            NodeType::Input | NodeType::Output => TERMINAL,
            NodeType::Residual => NodeMetrics {
                width: 32.0,
                height: 32.0,
                shape: NodeShape::Dot,
                palette: NodePalette::Io,
            },
            NodeType::MoeExpert => NodeMetrics {
                width: 140.0,
                height: 36.0,
                shape: NodeShape::Card,
                palette: NodePalette::Mlp,
            },
            NodeType::Attention => NodeMetrics {
                palette: NodePalette::Attention,
                ..BLOCK
            },
            NodeType::Norm => NodeMetrics {
                palette: NodePalette::Norm,
                ..BLOCK
            },
            NodeType::Embedding => NodeMetrics {
                palette: NodePalette::Embedding,
                ..BLOCK
            },
            NodeType::MoeRouter => NodeMetrics {
                palette: NodePalette::Moe,
                ..BLOCK
            },
            NodeType::LmHead => NodeMetrics {
                palette: NodePalette::Io,
                ..BLOCK
            },
            NodeType::Mlp => BLOCK,
        }
    }
}

/// How the layout engine places a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Centered on the vertical spine, one per row.
    #[default]
    Stack,
    /// Laid out side by side with adjacent `Row` nodes.
    Row,
}

/// One value in a node's inspector detail list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    /// Free-form text (dimension strings, yes/no, activation names).
    Text(String),
    /// Plain count.
    Int(u64),
}

impl From<&str> for DetailValue {
    fn from(s: &str) -> Self {
        DetailValue::Text(s.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(s: String) -> Self {
        DetailValue::Text(s)
    }
}

impl From<u64> for DetailValue {
    fn from(n: u64) -> Self {
        DetailValue::Int(n)
    }
}

/// Ordered key/value detail list shown in the inspector.
pub type Details = Vec<(String, DetailValue)>;

/// A visual/semantic unit of the diagram.
///
/// Width and height depend only on [`NodeType`], assigned at creation and
/// never changed. Positions are the node's center, written exactly once by
/// the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique id within the graph.
    pub id: NodeId,
    /// Semantic kind.
    pub node_type: NodeType,
    /// Display label.
    pub label: String,
    /// Secondary label line (usually a dimension string).
    pub sublabel: Option<String>,
    /// Inspector details, in display order.
    pub details: Details,
    /// How the layout engine places this node.
    pub placement: Placement,
    /// Center x, set by layout.
    pub x: f32,
    /// Center y, set by layout.
    pub y: f32,
    /// Fixed width from the type table.
    pub width: f32,
    /// Fixed height from the type table.
    pub height: f32,
}

impl GraphNode {
    /// Left edge of the node rectangle.
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    /// Right edge of the node rectangle.
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Top edge of the node rectangle.
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    /// Bottom edge of the node rectangle.
    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_depend_only_on_type() {
        assert_eq!(NodeType::Attention.metrics().width, 200.0);
        assert_eq!(NodeType::MoeExpert.metrics().width, 140.0);
        assert_eq!(NodeType::MoeExpert.metrics().height, 36.0);
        assert_eq!(NodeType::Input.metrics(), NodeType::Output.metrics());
        assert_eq!(NodeType::Residual.metrics().shape, NodeShape::Dot);
    }

    #[test]
    fn palettes_follow_the_theme_table() {
        assert_eq!(NodeType::MoeRouter.metrics().palette, NodePalette::Moe);
        assert_eq!(NodeType::MoeExpert.metrics().palette, NodePalette::Mlp);
        assert_eq!(NodeType::LmHead.metrics().palette, NodePalette::Io);
    }
}
