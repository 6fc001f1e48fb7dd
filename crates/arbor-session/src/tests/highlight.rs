use arbor_core::settings::settings;
use arbor_core::trie::Trie;

use crate::highlight::{Emphasis, HighlightState};

fn sample() -> Trie {
    Trie::from_words(["app", "apple", "apply", "bat"])
}

#[test]
fn test_prefix_highlight_marks_path() {
    let trie = sample();
    let mut hl = HighlightState::new();
    hl.highlight_prefix(&trie, "app");
    assert_eq!(hl.emphasized_count(), 3);

    let a = trie.root().child('a').unwrap();
    assert_eq!(hl.node_emphasis(a), Emphasis::Accent);
    assert!(hl.edge_emphasized(a));
    // Nothing pulses on a live-prefix pass.
    assert!(!hl.is_pulsing(a));
}

#[test]
fn test_prefix_highlight_stops_at_break() {
    let trie = sample();
    let mut hl = HighlightState::new();
    // Path breaks after "ap"; partial highlighting is the intended result.
    hl.highlight_prefix(&trie, "apx");
    assert_eq!(hl.emphasized_count(), 2);
}

#[test]
fn test_unmatched_prefix_marks_nothing() {
    let trie = sample();
    let mut hl = HighlightState::new();
    hl.highlight_prefix(&trie, "xyz");
    assert_eq!(hl.emphasized_count(), 0);
}

#[test]
fn test_empty_query_resets_only() {
    let trie = sample();
    let mut hl = HighlightState::new();
    hl.highlight_prefix(&trie, "app");
    hl.highlight_prefix(&trie, "");
    assert_eq!(hl.emphasized_count(), 0);
}

#[test]
fn test_new_pass_resets_previous() {
    let trie = sample();
    let mut hl = HighlightState::new();
    hl.highlight_prefix(&trie, "app");
    hl.highlight_prefix(&trie, "bat");
    let a = trie.root().child('a').unwrap();
    let b = trie.root().child('b').unwrap();
    assert_eq!(hl.node_emphasis(a), Emphasis::Base);
    assert_eq!(hl.node_emphasis(b), Emphasis::Accent);
}

#[test]
fn test_selection_two_tier_expiry() {
    let trie = sample();
    let h = &settings().highlight;
    let mut hl = HighlightState::new();
    let now = 1_000;
    hl.highlight_selection(&trie, "app", now);

    let a = trie.root().child('a').unwrap();
    assert!(hl.is_pulsing(a));
    assert_eq!(hl.node_emphasis(a), Emphasis::Accent);

    // Before the pulse deadline nothing changes.
    assert!(!hl.tick(now + h.pulse_ms - 1));
    assert!(hl.is_pulsing(a));

    // Pulse reverts first; the accent fill is held a bit longer.
    assert!(hl.tick(now + h.pulse_ms));
    assert!(!hl.is_pulsing(a));
    assert_eq!(hl.node_emphasis(a), Emphasis::Accent);

    // Accent expires last, restoring the base palette.
    assert!(hl.tick(now + h.accent_ms));
    assert_eq!(hl.node_emphasis(a), Emphasis::Base);
    assert_eq!(hl.emphasized_count(), 0);

    // Fully idle now.
    assert!(!hl.tick(now + h.accent_ms + 10_000));
}

/// A newer pass supersedes a pending reversion: the old deadlines are
/// dropped by the unconditional reset, so a late tick can't clear the
/// new emphasis.
#[test]
fn test_newer_pass_supersedes_pending_reversion() {
    let trie = sample();
    let h = &settings().highlight;
    let mut hl = HighlightState::new();

    hl.highlight_selection(&trie, "app", 0);
    hl.highlight_prefix(&trie, "bat");

    // Tick past the stale selection deadlines.
    assert!(!hl.tick(h.accent_ms + 1));
    let b = trie.root().child('b').unwrap();
    assert_eq!(hl.node_emphasis(b), Emphasis::Accent);
}

#[test]
fn test_selection_of_unindexed_word_is_soft() {
    let trie = sample();
    let mut hl = HighlightState::new();
    hl.highlight_selection(&trie, "zebra", 0);
    assert_eq!(hl.emphasized_count(), 0);
    // No deadlines were scheduled for an empty walk.
    assert!(!hl.tick(u64::MAX));
}

#[test]
fn test_overlapping_selections_keep_latest() {
    let trie = sample();
    let h = &settings().highlight;
    let mut hl = HighlightState::new();

    hl.highlight_selection(&trie, "app", 0);
    hl.highlight_selection(&trie, "bat", 500);

    let b = trie.root().child('b').unwrap();
    // First selection's pulse deadline has passed, but the second pass
    // reset it; the new pulse holds until its own deadline.
    assert!(!hl.tick(h.pulse_ms - 1));
    assert!(hl.is_pulsing(b));
    assert!(hl.tick(500 + h.pulse_ms));
    assert!(!hl.is_pulsing(b));
    assert_eq!(hl.node_emphasis(b), Emphasis::Accent);
}
