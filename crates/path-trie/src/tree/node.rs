//! Core node types for the path trie

use derive_more::{Display, From, Into};
use std::fmt;

/// Unique identifier for a node within a trie
///
/// Internally represented as an index into the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display(fmt = "NodeId({})", _0)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A single path segment in the trie
///
/// Nodes are owned by the trie's arena. `parent` is a navigation handle only;
/// the parent's `children` list is the one ownership edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    segment: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    score: u64,
}

impl Node {
    /// Create an unlinked node with a zero score
    ///
    /// Does not touch the parent's child list; linking is done by
    /// [`PathTrie::add_child`](crate::tree::PathTrie::add_child).
    pub fn new(parent: Option<NodeId>, segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            parent,
            children: Vec::new(),
            score: 0,
        }
    }

    /// The segment label of this node (not the full path)
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// The parent handle, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if this node has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Accumulated traversal score
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Linked children, in the order they were added
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment)
    }
}
