//! Deterministic 2-D layout of the trie for visualization.
//!
//! Classic centered tree layout: a recursive post-order pass assigns
//! each subtree a width in leaf slots, places children left-to-right in
//! lexicographic label order, and centers every parent over its
//! children's span. Identical trie input produces identical positions.
//! Coordinates are in abstract world units; `FitTransform` maps them
//! onto a concrete canvas.

use tracing::debug_span;

use crate::settings::settings;
use crate::trie::{NodeId, Trie, TrieNode};

/// Position of one node for one layout pass. Ephemeral; recomputed
/// wholesale on every invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPosition {
    pub id: NodeId,
    /// World-unit horizontal position.
    pub x: f64,
    /// Edge distance from the root; vertical position is `depth * row_height`.
    pub depth: u32,
    /// Label of the incoming edge from the parent; `None` on the root.
    pub edge_label: Option<char>,
}

/// Bounding extent of a layout pass, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub max_depth: u32,
}

impl LayoutExtent {
    fn pad(&self) -> f64 {
        let l = &settings().layout;
        l.padding * l.base_radius
    }

    /// Padded world width.
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x) + 2.0 * self.pad()
    }

    /// Padded world height.
    pub fn height(&self) -> f64 {
        f64::from(self.max_depth) * settings().layout.row_height + 2.0 * self.pad()
    }
}

/// Complete result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    /// Post-order: children precede their parent; the root is last.
    pub positions: Vec<LayoutPosition>,
    pub extent: LayoutExtent,
}

impl TreeLayout {
    pub fn position_of(&self, id: NodeId) -> Option<&LayoutPosition> {
        self.positions.iter().find(|p| p.id == id)
    }
}

/// Uniform scale + offset from world units to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FitTransform {
    /// Canvas coordinates for a world-unit position.
    pub fn apply(&self, x: f64, depth: u32) -> (f64, f64) {
        let y = f64::from(depth) * settings().layout.row_height;
        (x * self.scale + self.offset_x, y * self.scale + self.offset_y)
    }
}

/// Lay out the whole trie. An empty trie yields the lone root position
/// and a degenerate extent; never an error.
pub fn layout(trie: &Trie) -> TreeLayout {
    let _span = debug_span!("layout", nodes = trie.len()).entered();

    let mut positions = Vec::with_capacity(trie.len());
    place(trie, NodeId::ROOT, 0.0, 0, None, &mut positions);

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_depth = 0;
    for p in &positions {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        max_depth = max_depth.max(p.depth);
    }
    TreeLayout {
        positions,
        extent: LayoutExtent {
            min_x,
            max_x,
            max_depth,
        },
    }
}

/// Recursive placement. Returns the subtree width in leaf slots
/// (minimum 1). `x` is the left edge of the subtree's span.
fn place(
    trie: &Trie,
    id: NodeId,
    x: f64,
    depth: u32,
    edge_label: Option<char>,
    out: &mut Vec<LayoutPosition>,
) -> usize {
    let node = trie.node(id);
    let spacing = settings().layout.horizontal_spacing;

    if node.is_leaf() {
        out.push(LayoutPosition {
            id,
            x,
            depth,
            edge_label,
        });
        return 1;
    }

    let mut child_x = x;
    let mut total_width = 0;
    for (label, child) in node.children() {
        let w = place(trie, child, child_x, depth + 1, Some(label), out);
        child_x += w as f64 * spacing;
        total_width += w;
    }

    // Center over the span regardless of subtree asymmetry.
    let own_x = x + (total_width as f64 * spacing - spacing) / 2.0;
    out.push(LayoutPosition {
        id,
        x: own_x,
        depth,
        edge_label,
    });
    total_width
}

/// Visual radius for a node. Weight grows the circle; the floor keeps
/// zero-weight nodes visible. Presentational only — spacing uses the
/// fixed constants, so tree shape is stable across weight updates.
pub fn node_radius(node: &TrieNode) -> f64 {
    let l = &settings().layout;
    let r = l.base_radius + node.weight() as f64 * l.size_increment_per_weight;
    r.max(l.min_radius)
}

/// Transform fitting the padded extent inside a canvas, centered, with
/// aspect ratio preserved.
pub fn fit_transform(extent: &LayoutExtent, canvas_w: f64, canvas_h: f64) -> FitTransform {
    let l = &settings().layout;
    let pad = l.padding * l.base_radius;
    let world_w = extent.width().max(f64::EPSILON);
    let world_h = extent.height().max(f64::EPSILON);
    let scale = (canvas_w / world_w).min(canvas_h / world_h);

    // World origin of the padded box.
    let x0 = extent.min_x - pad;
    let y0 = -pad;
    FitTransform {
        scale,
        offset_x: (canvas_w - world_w * scale) / 2.0 - x0 * scale,
        offset_y: (canvas_h - world_h * scale) / 2.0 - y0 * scale,
    }
}
