//! Weighted prefix trie backing incremental autocomplete.
//!
//! Nodes live in an arena (`Vec<TrieNode>`) and refer to each other by
//! `NodeId`, so layout and highlight state can key off stable, copyable
//! ids instead of references into the tree. Children are kept in a
//! `BTreeMap` so every traversal is lexicographic without re-sorting.

use std::collections::BTreeMap;

use tracing::debug_span;

/// Stable handle to a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Always present, even in an empty trie.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// One character position in the automaton.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_end: bool,
    frequency: u64,
    weight: u64,
    /// Full word, cached on terminal nodes at insert time so path
    /// reconstruction on the hot path is O(1).
    canonical_path: Option<String>,
}

impl TrieNode {
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Load-time insertion count for the word ending here.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// User-selection count for the word ending here. Never decreases.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Cached full word; `Some` only on terminal nodes.
    pub fn canonical_path(&self) -> Option<&str> {
        self.canonical_path.as_deref()
    }

    pub fn child(&self, label: char) -> Option<NodeId> {
        self.children.get(&label).copied()
    }

    /// Children in lexicographic label order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Case-fold a word or prefix to its canonical indexed form.
///
/// Only lowercase folding is in scope; no Unicode normalization.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Owned trie over the node arena. Root is always `NodeId::ROOT`.
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Build a trie from a word list, each word at frequency 1.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            trie.insert_word(w.as_ref());
        }
        trie
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> &TrieNode {
        self.node(NodeId::ROOT)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no word has been inserted (a lone root does not count).
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct words in the index.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Insert `word` with the given load-time frequency.
    ///
    /// Repeated inserts of the same word leave the tree shape unchanged
    /// and accumulate frequency. The empty string is a legal degenerate
    /// word terminating at the root.
    pub fn insert(&mut self, word: &str, frequency: u64) {
        let folded = fold(word);
        let mut cur = NodeId::ROOT;
        for ch in folded.chars() {
            cur = match self.node(cur).child(ch) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.node_mut(cur).children.insert(ch, next);
                    next
                }
            };
        }
        if !self.node(cur).is_end {
            self.word_count += 1;
        }
        let terminal = self.node_mut(cur);
        terminal.is_end = true;
        terminal.frequency += frequency;
        terminal.canonical_path = Some(folded);
    }

    /// Insert a word at frequency 1 (load-time word list entry).
    pub fn insert_word(&mut self, word: &str) {
        self.insert(word, 1);
    }

    /// Walk an exact character path from the root. `None` when the path
    /// breaks. The empty string resolves to the root.
    fn walk(&self, path: &str) -> Option<NodeId> {
        let mut cur = NodeId::ROOT;
        for ch in path.chars() {
            cur = self.node(cur).child(ch)?;
        }
        Some(cur)
    }

    /// Resolve a prefix (case-folded first) to the node ending it, if
    /// the path exists. Used by highlighting as well as `search`.
    pub fn walk_prefix(&self, prefix: &str) -> Option<NodeId> {
        self.walk(&fold(prefix))
    }

    /// All words under `prefix`, most relevant first.
    ///
    /// Relevance is descending `frequency + weight`; ties break by
    /// ascending lexicographic order, so equal-score results are fully
    /// deterministic. A prefix absent from the index yields an empty
    /// vec, not an error. Truncation to a display limit is the
    /// caller's job.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let _span = debug_span!("search", prefix).entered();

        let Some(start) = self.walk(&fold(prefix)) else {
            return Vec::new();
        };
        let mut hits: Vec<(String, u64)> = Vec::new();
        self.collect(start, &mut hits);
        hits.sort_by(|(word_a, score_a), (word_b, score_b)| {
            score_b.cmp(score_a).then_with(|| word_a.cmp(word_b))
        });
        hits.into_iter().map(|(word, _)| word).collect()
    }

    /// Depth-first collection of every terminal node in a subtree, in
    /// lexicographic order before ranking.
    fn collect(&self, id: NodeId, out: &mut Vec<(String, u64)>) {
        let node = self.node(id);
        if node.is_end {
            if let Some(word) = node.canonical_path() {
                out.push((word.to_string(), node.frequency + node.weight));
            }
        }
        for (_, child) in node.children() {
            self.collect(child, out);
        }
    }

    /// Resolve an indexed word to its terminal node.
    ///
    /// `None` when the word was never inserted — an expected outcome,
    /// not an error, since callers normally only ask about words that
    /// came out of `search`.
    pub fn lookup(&self, word: &str) -> Option<NodeId> {
        let id = self.walk(&fold(word))?;
        self.node(id).is_end.then_some(id)
    }

    /// Record one user selection of `word`, returning its new weight.
    /// A no-op (`None`) for unindexed words.
    pub fn bump_weight(&mut self, word: &str) -> Option<u64> {
        let id = self.lookup(word)?;
        let node = self.node_mut(id);
        node.weight += 1;
        Some(node.weight)
    }

    /// The character path from the root to `id`.
    ///
    /// O(1) for terminal nodes via the cached canonical path; interior
    /// nodes fall back to a depth-first identity search, which only
    /// instrumentation (tooltips on non-word nodes) ever takes.
    pub fn path_from_root(&self, id: NodeId) -> Option<String> {
        if id.0 >= self.nodes.len() {
            return None;
        }
        if let Some(word) = self.node(id).canonical_path() {
            return Some(word.to_string());
        }
        let mut path = String::new();
        if self.find_path(NodeId::ROOT, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn find_path(&self, cur: NodeId, target: NodeId, path: &mut String) -> bool {
        if cur == target {
            return true;
        }
        for (ch, child) in self.node(cur).children() {
            path.push(ch);
            if self.find_path(child, target, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}
