//! Deterministic graph layout.
//!
//! Single top-to-bottom sweep over nodes in construction order. Stack nodes
//! sit centered on a vertical spine; consecutive [`Placement::Row`] nodes
//! (MoE experts) share one horizontal row centered on the spine. Group boxes
//! and overall extents are derived afterwards, then everything shifts into a
//! margin-padded, non-negative coordinate space.

use crate::graph::{ArchitectureGraph, GraphNode, NodeId, Placement};
use std::collections::HashMap;

/// Vertical space between consecutive rows.
const VERTICAL_GAP: f32 = 28.0;
/// Horizontal group padding on each side.
const GROUP_PADDING_X: f32 = 30.0;
/// Group padding above the members, sized for the label chip.
const GROUP_PADDING_TOP: f32 = 36.0;
/// Group padding below the members.
const GROUP_PADDING_BOTTOM: f32 = 20.0;
/// Horizontal space between row-mates.
const ROW_GAP: f32 = 12.0;
/// Margin around the whole diagram.
const CANVAS_MARGIN: f32 = 60.0;
/// Starting y for the first row, pre-shift.
const TOP_START: f32 = 40.0;

/// Assign positions to every node, compute group boxes and total extents.
///
/// Mutates the graph in place. Node sizes are never touched; only x/y move.
/// Running layout twice is idempotent in structure (coordinates are
/// recomputed from scratch each time).
pub fn layout_graph(graph: &mut ArchitectureGraph) {
    if graph.nodes.is_empty() {
        return;
    }

    place_nodes(&mut graph.nodes);

    let rects: HashMap<NodeId, Rect> = graph
        .nodes
        .iter()
        .map(|n| (n.id, Rect::of(n)))
        .collect();

    for group in &mut graph.groups {
        let members: Vec<&Rect> = group
            .node_ids
            .iter()
            .filter_map(|id| rects.get(id))
            .collect();
        // A group with no resolvable members keeps its zero rect.
        if members.is_empty() {
            continue;
        }
        let bounds = Rect::union(members.iter().copied());
        group.x = (bounds.min_x + bounds.max_x) / 2.0;
        group.y = bounds.min_y - GROUP_PADDING_TOP;
        group.width = bounds.width() + GROUP_PADDING_X * 2.0;
        group.height = bounds.height() + GROUP_PADDING_TOP + GROUP_PADDING_BOTTOM;
    }

    // Global bounds over nodes and groups.
    let mut bounds = Rect::union(rects.values());
    for g in &graph.groups {
        bounds.include(g.x - g.width / 2.0, g.y);
        bounds.include(g.x + g.width / 2.0, g.y + g.height);
    }

    // Shift so the minimum coordinate lands on the canvas margin.
    let offset_x = -bounds.min_x + CANVAS_MARGIN;
    let offset_y = -bounds.min_y + CANVAS_MARGIN;
    for n in &mut graph.nodes {
        n.x += offset_x;
        n.y += offset_y;
    }
    for g in &mut graph.groups {
        g.x += offset_x;
        g.y += offset_y;
    }

    graph.total_width = bounds.width() + CANVAS_MARGIN * 2.0;
    graph.total_height = bounds.height() + CANVAS_MARGIN * 2.0;
}

/// Sweep nodes in order, partitioning consecutive `Row` nodes into rows.
fn place_nodes(nodes: &mut [GraphNode]) {
    let mut cursor_y = TOP_START;
    let mut i = 0;

    while i < nodes.len() {
        if nodes[i].placement == Placement::Row {
            let mut end = i;
            while end < nodes.len() && nodes[end].placement == Placement::Row {
                end += 1;
            }
            let row = &mut nodes[i..end];

            let total_width: f32 = row.iter().map(|n| n.width).sum::<f32>()
                + (row.len() - 1) as f32 * ROW_GAP;

            let mut x = -total_width / 2.0;
            for node in row.iter_mut() {
                node.x = x + node.width / 2.0;
                node.y = cursor_y;
                x += node.width + ROW_GAP;
            }

            cursor_y += row[0].height + VERTICAL_GAP;
            i = end;
        } else {
            nodes[i].x = 0.0;
            nodes[i].y = cursor_y;
            cursor_y += nodes[i].height + VERTICAL_GAP;
            i += 1;
        }
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy)]
struct Rect {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Rect {
    fn of(node: &GraphNode) -> Self {
        Self {
            min_x: node.left(),
            max_x: node.right(),
            min_y: node.top(),
            max_y: node.bottom(),
        }
    }

    fn union<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Self {
        let mut out = Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        for r in rects {
            out.min_x = out.min_x.min(r.min_x);
            out.max_x = out.max_x.max(r.max_x);
            out.min_y = out.min_y.min(r.min_y);
            out.max_y = out.max_y.max(r.max_y);
        }
        out
    }

    fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
