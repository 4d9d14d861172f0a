//! Inserting whole paths and reading scores back out
//!
//! The trie primitives only know how to allocate, link and look up single
//! segments. This module drives them from full path strings: every insert
//! scores each node along the path once, so a node's score is the number of
//! inserted paths that pass through it.

use crate::tree::{NodeId, PathTrie, Tree};
use log::{debug, trace};

/// Split a path into its segments
///
/// Exactly one leading separator is dropped and the rest is split on the
/// separator. Nothing is normalized: `/a//b/` yields `a`, `""`, `b`, `""`.
/// The empty string and the lone separator yield no segments.
pub fn split_segments(path: &str, separator: char) -> Vec<&str> {
    let rest = path.strip_prefix(separator).unwrap_or(path);
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(separator).collect()
}

impl PathTrie {
    /// Insert a full path and return its deepest node
    ///
    /// Existing nodes along the path have their score bumped; missing ones
    /// are allocated and linked, which scores them once. Inserting the root
    /// path leaves the trie untouched and returns the root.
    ///
    /// ```
    /// use path_trie::prelude::*;
    ///
    /// let mut trie = PathTrie::new();
    /// trie.insert("/a/b/c");
    /// trie.insert("/a/x");
    /// let a = trie.lookup("/a").unwrap();
    /// assert_eq!(trie.score(a), 2);
    /// ```
    pub fn insert(&mut self, path: &str) -> NodeId {
        let separator = self.separator();
        let mut current = self.root();
        for segment in split_segments(path, separator) {
            current = match self.get_child(current, segment) {
                Some(existing) => {
                    self.increment_score(existing);
                    existing
                }
                None => {
                    let created = self.new_node(current, segment);
                    self.add_child(current, created);
                    created
                }
            };
        }
        trace!("inserted '{}' as {}", path, current);
        current
    }

    /// Insert every path from an iterator, returning how many were inserted
    pub fn extend<I, S>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for path in paths {
            self.insert(path.as_ref());
            count += 1;
        }
        debug!("inserted {} paths, trie has {} nodes", count, self.node_count());
        count
    }

    /// Find the node for a full path without modifying the trie
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        split_segments(path, self.separator())
            .into_iter()
            .try_fold(self.root(), |current, segment| {
                self.get_child(current, segment)
            })
    }

    /// Children of a node ordered by score, highest first
    ///
    /// Ties keep insertion order.
    pub fn ranked_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut ranked = self.children_of(id).to_vec();
        ranked.sort_by(|&a, &b| self.score(b).cmp(&self.score(a)));
        ranked
    }

    /// The highest-scoring child of a node, earliest inserted on ties
    pub fn heaviest_child(&self, id: NodeId) -> Option<NodeId> {
        self.children_of(id)
            .iter()
            .copied()
            .fold(None, |best: Option<NodeId>, child| match best {
                Some(b) if self.score(b) >= self.score(child) => Some(b),
                _ => Some(child),
            })
    }

    /// Follow the heaviest child from the root, level by level
    ///
    /// Descent stops at a node without children or when the heaviest child
    /// scores below `min_score`. The root itself is not part of the chain.
    pub fn heaviest_path(&self, min_score: u64) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.root();
        while let Some(next) = self.heaviest_child(current) {
            if self.score(next) < min_score {
                break;
            }
            chain.push(next);
            current = next;
        }
        chain
    }

    /// The last node of [`heaviest_path`](Self::heaviest_path), or the root
    /// when nothing reaches `min_score`
    pub fn hottest(&self, min_score: u64) -> NodeId {
        self.heaviest_path(min_score)
            .last()
            .copied()
            .unwrap_or_else(|| self.root())
    }
}
