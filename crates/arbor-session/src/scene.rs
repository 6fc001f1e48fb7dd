//! Wholesale clear-and-redraw of the trie onto an abstract canvas.
//!
//! The session doesn't know anything about the rendering technology;
//! the host implements [`Canvas`] with four primitives and gets the
//! scene rebuilt from scratch on every render pass. Drawn-element
//! handles never survive across passes, so nothing here keys visual
//! state off object identity.

use std::collections::HashMap;

use arbor_core::layout::{node_radius, FitTransform, TreeLayout};
use arbor_core::settings::settings;
use arbor_core::trie::Trie;

use crate::highlight::{Emphasis, HighlightState};

/// Fade state tagged onto a drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    FadedIn,
    Emphasized,
}

/// Minimal drawing surface the host provides. Colors are `#rrggbb`.
pub trait Canvas {
    fn clear(&mut self);
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str, state: VisualState);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, state: VisualState);
    fn draw_text(&mut self, x: f64, y: f64, text: &str);
    /// Attach a tooltip to whatever shape sits at this point.
    fn set_tooltip(&mut self, x: f64, y: f64, text: &str);
}

/// Redraw the whole scene: edges first, then nodes over them.
pub fn render(
    trie: &Trie,
    layout: &TreeLayout,
    highlight: &HighlightState,
    transform: &FitTransform,
    canvas: &mut dyn Canvas,
) {
    canvas.clear();
    let palette = &settings().palette;

    let positions: HashMap<_, _> = layout.positions.iter().map(|p| (p.id, p)).collect();

    for p in &layout.positions {
        let (x1, y1) = transform.apply(p.x, p.depth);
        for (_, child) in trie.node(p.id).children() {
            let Some(cp) = positions.get(&child) else {
                continue;
            };
            let (x2, y2) = transform.apply(cp.x, cp.depth);
            let (stroke, state) = if highlight.edge_emphasized(child) {
                (palette.accent_fill.as_str(), VisualState::Emphasized)
            } else {
                (palette.edge_stroke.as_str(), VisualState::FadedIn)
            };
            canvas.draw_line(x1, y1, x2, y2, stroke, state);
        }
    }

    for p in &layout.positions {
        let node = trie.node(p.id);
        let (x, y) = transform.apply(p.x, p.depth);
        let radius = node_radius(node) * transform.scale;

        let fill = match highlight.node_emphasis(p.id) {
            Emphasis::Accent => palette.accent_fill.as_str(),
            Emphasis::Base if node.is_end() => palette.end_fill.as_str(),
            Emphasis::Base => palette.node_fill.as_str(),
        };
        let (stroke, state) = if highlight.is_pulsing(p.id) {
            (palette.pulse_stroke.as_str(), VisualState::Emphasized)
        } else {
            (palette.edge_stroke.as_str(), VisualState::FadedIn)
        };
        canvas.draw_circle(x, y, radius, fill, stroke, state);

        if let Some(label) = p.edge_label {
            canvas.draw_text(x, y, &label.to_string());
        }

        let tooltip = if node.is_end() {
            format!(
                "{} (freq {}, weight {})",
                node.canonical_path().unwrap_or_default(),
                node.frequency(),
                node.weight()
            )
        } else {
            // Interior nodes take the DFS fallback; tooltip-only path.
            trie.path_from_root(p.id).unwrap_or_default()
        };
        canvas.set_tooltip(x, y, &tooltip);
    }
}
