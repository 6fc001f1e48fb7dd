//! Event and response types for the autocomplete session.

/// Millisecond timestamp supplied by the host. The session never reads
/// a wall clock; all time-based behavior is driven by the `now`
/// argument to `handle_event`.
pub type TimestampMs = u64;

/// One atomically-handled unit of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text field's content changed; carries the full new query.
    QueryChanged(String),
    /// Advance the suggestion selection (wraps).
    MoveDown,
    /// Retreat the suggestion selection (wraps).
    MoveUp,
    /// Commit the currently selected suggestion. No-op without one.
    Commit,
    /// Pointer selection of a list entry by index.
    ClickSuggestion(usize),
    /// Focus left the suggestion surface.
    FocusLost,
    /// Periodic clock tick; drives highlight expiry.
    Tick,
}

/// Suggestion panel action — exactly one of three states, so "show and
/// hide at once" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the panel.
    Show {
        items: Vec<String>,
        selected: Option<usize>,
    },
    /// Hide the panel.
    Hide,
}

/// What the host should do after one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    pub suggestions: SuggestionAction,
    /// Word committed by this event, if any.
    pub committed: Option<String>,
    /// True when the canvas must be cleared and redrawn (layout,
    /// radius, or highlight state changed).
    pub needs_render: bool,
}

impl EventResponse {
    pub(crate) fn unchanged() -> Self {
        Self {
            suggestions: SuggestionAction::Keep,
            committed: None,
            needs_render: false,
        }
    }

    pub(crate) fn rendered() -> Self {
        Self {
            needs_render: true,
            ..Self::unchanged()
        }
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}
