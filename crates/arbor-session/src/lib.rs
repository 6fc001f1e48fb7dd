//! Stateful autocomplete session: query handling, suggestion-list
//! navigation, commit, and highlight bookkeeping.
//!
//! `Session` owns the trie and processes each input event atomically,
//! returning responses that the host frontend translates into list and
//! canvas updates. All time-based behavior (highlight reversion) is
//! driven by the `now` timestamp the host passes in; there is no
//! internal clock and no background refresh loop.

pub mod highlight;
pub mod scene;

mod types;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use arbor_core::layout::{self, TreeLayout};
use arbor_core::settings::settings;
use arbor_core::trie::Trie;

use highlight::HighlightState;
use types::cyclic_index;

pub use types::{EventResponse, InputEvent, SuggestionAction, TimestampMs};

/// Interaction state machine over one trie.
///
/// Two degrees of freedom: whether a suggestion list is up, and whether
/// an entry is selected. Commit with no selection is a no-op, not an
/// error.
pub struct Session {
    trie: Trie,
    suggestions: Vec<String>,
    /// `None` is the "no selection" sentinel, scoped to the lifetime of
    /// the current list.
    selected: Option<usize>,
    highlight: HighlightState,
}

impl Session {
    /// Build a session from the load-time word list, each word inserted
    /// at frequency 1.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            trie: Trie::from_words(words),
            suggestions: Vec::new(),
            selected: None,
            highlight: HighlightState::new(),
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Fresh layout pass over the current trie. Recomputed wholesale
    /// whenever the node set or any weight changed.
    pub fn layout(&self) -> TreeLayout {
        layout::layout(&self.trie)
    }

    /// Wholesale redraw onto a host canvas: fresh layout pass, fit to
    /// the canvas extent, clear and draw.
    pub fn render_to(&self, canvas_w: f64, canvas_h: f64, canvas: &mut dyn scene::Canvas) {
        let layout = self.layout();
        let transform = layout::fit_transform(&layout.extent, canvas_w, canvas_h);
        scene::render(&self.trie, &layout, &self.highlight, &transform, canvas);
    }

    /// Process one event. `now` is the host's clock in milliseconds and
    /// only matters for highlight scheduling/expiry.
    pub fn handle_event(&mut self, event: InputEvent, now: TimestampMs) -> EventResponse {
        let _span = debug_span!("handle_event", ?event).entered();

        match event {
            InputEvent::QueryChanged(query) => self.update_query(&query),

            InputEvent::MoveDown => self.navigate(1),
            InputEvent::MoveUp => self.navigate(-1),

            InputEvent::Commit => match self.selected {
                Some(index) => self.commit_index(index, now),
                None => EventResponse::unchanged(),
            },

            InputEvent::ClickSuggestion(index) => {
                if index < self.suggestions.len() {
                    self.commit_index(index, now)
                } else {
                    // Stale or misbehaving caller; fail soft.
                    EventResponse::unchanged()
                }
            }

            InputEvent::FocusLost => {
                self.suggestions.clear();
                self.selected = None;
                EventResponse {
                    suggestions: SuggestionAction::Hide,
                    ..EventResponse::unchanged()
                }
            }

            InputEvent::Tick => {
                if self.highlight.tick(now) {
                    EventResponse::rendered()
                } else {
                    EventResponse::unchanged()
                }
            }
        }
    }

    /// New query: selection resets, list recomputes, live-prefix
    /// highlight replaces whatever was emphasized before.
    fn update_query(&mut self, query: &str) -> EventResponse {
        self.selected = None;
        self.suggestions = if query.is_empty() {
            Vec::new()
        } else {
            let mut items = self.trie.search(query);
            items.truncate(settings().suggest.max_results);
            items
        };
        self.highlight.highlight_prefix(&self.trie, query);

        let suggestions = if self.suggestions.is_empty() {
            SuggestionAction::Hide
        } else {
            SuggestionAction::Show {
                items: self.suggestions.clone(),
                selected: None,
            }
        };
        EventResponse {
            suggestions,
            committed: None,
            needs_render: true,
        }
    }

    /// Move the selection with wrap-around; no-op on an empty list.
    fn navigate(&mut self, delta: i32) -> EventResponse {
        if self.suggestions.is_empty() {
            return EventResponse::unchanged();
        }
        let len = self.suggestions.len();
        self.selected = Some(match self.selected {
            Some(i) => cyclic_index(i, delta, len),
            // First movement lands on the nearest end.
            None if delta > 0 => 0,
            None => len - 1,
        });
        EventResponse {
            suggestions: SuggestionAction::Show {
                items: self.suggestions.clone(),
                selected: self.selected,
            },
            committed: None,
            needs_render: false,
        }
    }

    /// Resolve a list index to a word, record the selection in the
    /// trie, and start the selection highlight.
    fn commit_index(&mut self, index: usize, now: TimestampMs) -> EventResponse {
        let word = self.suggestions[index].clone();
        match self.trie.bump_weight(&word) {
            Some(weight) => debug!(word = %word, weight, "selection recorded"),
            // Words reach the list via search, so this only fires for a
            // misbehaving external caller; the commit still goes through.
            None => debug!(word = %word, "selected word not in index"),
        }
        self.highlight.highlight_selection(&self.trie, &word, now);
        self.suggestions.clear();
        self.selected = None;
        EventResponse {
            suggestions: SuggestionAction::Hide,
            committed: Some(word),
            // Weight feeds node radius, so the canvas must redraw.
            needs_render: true,
        }
    }
}
