//! Text rendering of trie scores

use path_trie::prelude::*;
use std::fmt::{self, Write};

/// Summary of the hottest prefix in a trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of paths inserted into the trie
    pub total: usize,
    /// Deepest prefix shared by at least `min_score` paths
    pub hottest: String,
    /// Paths passing through `hottest`
    pub score: u64,
    /// Heaviest chain from the root down to `hottest`
    pub chain: Vec<(String, u64)>,
    /// Highest-scoring top-level entries, if requested
    pub top: Vec<(String, u64)>,
}

impl Report {
    /// Build a report from a populated trie
    pub fn new(trie: &PathTrie, total: usize, min_score: u64, top: Option<usize>) -> Self {
        let scored = |id: NodeId| (trie.path(id), trie.score(id));

        let chain: Vec<_> = trie.heaviest_path(min_score).into_iter().map(scored).collect();
        let hottest = trie.hottest(min_score);
        let top = match top {
            Some(n) => trie
                .ranked_children(trie.root())
                .into_iter()
                .take(n)
                .map(scored)
                .collect(),
            None => Vec::new(),
        };

        Self {
            total,
            hottest: trie.path(hottest),
            score: if trie.is_root(hottest) {
                total as u64
            } else {
                trie.score(hottest)
            },
            chain,
            top,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "hottest: {} ({} of {} paths)",
            self.hottest, self.score, self.total
        )?;
        if !self.chain.is_empty() {
            writeln!(f, "chain:")?;
            for (path, score) in &self.chain {
                writeln!(f, "  {} [{}]", path, score)?;
            }
        }
        if !self.top.is_empty() {
            writeln!(f, "top {}:", self.top.len())?;
            for (path, score) in &self.top {
                writeln!(f, "  {} [{}]", path, score)?;
            }
        }
        Ok(())
    }
}

/// Render every node, indented by depth, with its score
pub fn render_tree(trie: &PathTrie) -> String {
    let mut out = String::new();
    for id in trie.walk(TraversalOrder::PreOrder) {
        let Some(node) = trie.get(id) else { continue };
        let label = if node.is_root() {
            trie.path(id)
        } else {
            node.to_string()
        };
        let indent = "  ".repeat(trie.depth(id));
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}{} [{}]", indent, label, node.score());
    }
    out
}
