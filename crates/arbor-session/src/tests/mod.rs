mod highlight;

use crate::scene::{Canvas, VisualState};
use crate::{EventResponse, InputEvent, Session};

pub(super) fn make_session() -> Session {
    Session::new(["app", "apple", "apply", "bat", "bath"])
}

pub(super) fn query(session: &mut Session, q: &str) -> EventResponse {
    session.handle_event(InputEvent::QueryChanged(q.to_string()), 0)
}

/// Sum of selection weights across every indexed word.
pub(super) fn total_weight(session: &Session) -> u64 {
    session
        .trie()
        .search("")
        .iter()
        .filter_map(|w| session.trie().lookup(w))
        .map(|id| session.trie().node(id).weight())
        .sum()
}

/// Canvas test double recording every primitive call in order.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum DrawOp {
    Clear,
    Circle {
        radius: f64,
        fill: String,
        stroke: String,
        state: VisualState,
    },
    Line {
        stroke: String,
        state: VisualState,
    },
    Text(String),
    Tooltip(String),
}

#[derive(Default)]
pub(super) struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn circles(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .collect()
    }

    pub fn lines(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .collect()
    }

    pub fn tooltips(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Tooltip(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_circle(&mut self, _x: f64, _y: f64, radius: f64, fill: &str, stroke: &str, state: VisualState) {
        self.ops.push(DrawOp::Circle {
            radius,
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            state,
        });
    }

    fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, stroke: &str, state: VisualState) {
        self.ops.push(DrawOp::Line {
            stroke: stroke.to_string(),
            state,
        });
    }

    fn draw_text(&mut self, _x: f64, _y: f64, text: &str) {
        self.ops.push(DrawOp::Text(text.to_string()));
    }

    fn set_tooltip(&mut self, _x: f64, _y: f64, text: &str) {
        self.ops.push(DrawOp::Tooltip(text.to_string()));
    }
}
