//! Path highlighting over the trie.
//!
//! Both triggers share one primitive: unconditionally reset to the base
//! palette, then walk a character path from the root, emphasizing every
//! node and incoming edge visited. A path that breaks partway stops
//! early; the partial highlight is the intended result. Because every
//! pass resets first, overlapping selection highlights supersede each
//! other without any timer cancellation.

use std::collections::{HashMap, HashSet};

use arbor_core::settings::settings;
use arbor_core::trie::{fold, NodeId, Trie};

use crate::types::TimestampMs;

/// Per-node visual emphasis. `Base` is the resting palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Base,
    Accent,
}

/// Ephemeral highlight state for the current render.
///
/// Edges are keyed by their child node id — a node has exactly one
/// incoming edge, so the pair is unambiguous.
#[derive(Debug, Default)]
pub struct HighlightState {
    nodes: HashMap<NodeId, Emphasis>,
    edges: HashSet<NodeId>,
    pulse: HashSet<NodeId>,
    pulse_until: Option<TimestampMs>,
    accent_until: Option<TimestampMs>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the base palette: no emphasis anywhere, no pending
    /// reversion deadlines.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.pulse.clear();
        self.pulse_until = None;
        self.accent_until = None;
    }

    pub fn node_emphasis(&self, id: NodeId) -> Emphasis {
        self.nodes.get(&id).copied().unwrap_or_default()
    }

    /// Whether the edge into `child` is emphasized.
    pub fn edge_emphasized(&self, child: NodeId) -> bool {
        self.edges.contains(&child)
    }

    pub fn is_pulsing(&self, id: NodeId) -> bool {
        self.pulse.contains(&id)
    }

    /// Number of emphasized nodes.
    pub fn emphasized_count(&self) -> usize {
        self.nodes.len()
    }

    /// Live-prefix pass: held until the next pass resets it.
    pub fn highlight_prefix(&mut self, trie: &Trie, query: &str) {
        self.reset();
        self.mark_path(trie, query, false);
    }

    /// Selection pass: accent along the full word's path plus a
    /// transient pulse. The pulse reverts at `now + pulse_ms`; the
    /// accent fill is held slightly longer, until `now + accent_ms`.
    pub fn highlight_selection(&mut self, trie: &Trie, word: &str, now: TimestampMs) {
        self.reset();
        if self.mark_path(trie, word, true) == 0 {
            return;
        }
        let h = &settings().highlight;
        self.pulse_until = Some(now + h.pulse_ms);
        self.accent_until = Some(now + h.accent_ms);
    }

    /// Expire due emphasis tiers. Returns true when anything changed.
    pub fn tick(&mut self, now: TimestampMs) -> bool {
        let mut changed = false;
        if self.pulse_until.is_some_and(|t| now >= t) {
            self.pulse.clear();
            self.pulse_until = None;
            changed = true;
        }
        if self.accent_until.is_some_and(|t| now >= t) {
            self.reset();
            changed = true;
        }
        changed
    }

    /// Walk `path` from the root, marking each visited node and its
    /// incoming edge. Stops silently where the path breaks. Returns the
    /// number of nodes marked.
    fn mark_path(&mut self, trie: &Trie, path: &str, pulse: bool) -> usize {
        let folded = fold(path);
        let mut cur = NodeId::ROOT;
        let mut marked = 0;
        for ch in folded.chars() {
            let Some(next) = trie.node(cur).child(ch) else {
                break;
            };
            self.nodes.insert(next, Emphasis::Accent);
            self.edges.insert(next);
            if pulse {
                self.pulse.insert(next);
            }
            cur = next;
            marked += 1;
        }
        marked
    }
}
