//! Arena-backed path trie

use crate::tree::{Node, NodeId, Tree};
use log::{trace, warn};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = '/';

/// A rooted tree of path segments with per-node traversal scores
///
/// Every node lives in a single arena and is addressed by [`NodeId`]. The
/// root is created with the trie and is always [`NodeId::ROOT`]; its own
/// segment is empty and never appears in reconstructed paths.
///
/// The trie does not deduplicate children. Callers that link nodes by hand
/// must check [`get_child`](Self::get_child) before
/// [`add_child`](Self::add_child); [`insert`](Self::insert) does this for you.
///
/// # Example
///
/// ```
/// use path_trie::prelude::*;
///
/// let mut trie = PathTrie::new();
/// let a = trie.new_node(trie.root(), "a");
/// trie.add_child(trie.root(), a);
/// let b = trie.new_node(a, "b");
/// trie.add_child(a, b);
///
/// assert_eq!(trie.path(b), "/a/b");
/// assert_eq!(trie.score(a), 1);
/// assert_eq!(trie.get_child(a, "b"), Some(b));
/// ```
#[derive(Debug, Clone)]
pub struct PathTrie {
    /// Arena storage for nodes, indexed by `NodeId`
    nodes: Vec<Node>,
    separator: char,
}

impl Default for PathTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTrie {
    /// Create a trie holding only the root, using `/` as separator
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Create a trie holding only the root, using a custom separator
    pub fn with_separator(separator: char) -> Self {
        Self {
            nodes: vec![Node::new(None, "")],
            separator,
        }
    }

    /// The designated separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Allocate a new node under `parent` with a zero score
    ///
    /// The node is not linked: `parent`'s children are unchanged until the
    /// node is passed to [`add_child`](Self::add_child).
    ///
    /// An unknown `parent` is replaced by the root, so every parent chain
    /// still ends at the root.
    pub fn new_node(&mut self, parent: NodeId, segment: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let parent = if self.get(parent).is_some() {
            parent
        } else {
            warn!("new_node: unknown parent {}, allocating under the root", parent);
            self.root()
        };
        let node = Node::new(Some(parent), segment);
        trace!("allocated {} '{}' under {}", id, node.segment(), parent);
        self.nodes.push(node);
        id
    }

    /// Append `child` to `parent`'s children and bump the child's score
    ///
    /// Only the child's score changes. Adding the same node twice links it
    /// twice and scores it twice.
    ///
    /// `child` must have been allocated under `parent`. Anything else,
    /// including the root, is ignored so the children lists stay acyclic.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(child_node) = self.get(child) else {
            warn!("add_child: unknown child {}", child);
            return;
        };
        if child_node.parent() != Some(parent) {
            warn!(
                "add_child: {} was allocated under {:?}, not {}",
                child,
                child_node.parent(),
                parent
            );
            return;
        }
        let Some(parent_node) = self.nodes.get_mut(parent.get()) else {
            warn!("add_child: unknown parent {}", parent);
            return;
        };
        parent_node.push_child(child);
        self.increment_score(child);
    }

    /// Bump a node's score by exactly one
    pub fn increment_score(&mut self, id: NodeId) {
        match self.nodes.get_mut(id.get()) {
            Some(node) => node.increment_score(),
            None => warn!("increment_score: unknown node {}", id),
        }
    }

    /// Current score of a node, 0 for invalid IDs
    pub fn score(&self, id: NodeId) -> u64 {
        self.get(id).map(Node::score).unwrap_or(0)
    }

    /// Returns true if the node exists and has no parent
    pub fn is_root(&self, id: NodeId) -> bool {
        self.get(id).map(Node::is_root).unwrap_or(false)
    }

    /// Children of a node in insertion order, empty for invalid IDs
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// First child of `parent` whose segment equals `segment` exactly
    pub fn get_child(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.children_of(parent)
            .iter()
            .copied()
            .find(|&child| self.segment(child) == Some(segment))
    }

    /// Rebuild the full path of a node from its ancestors
    ///
    /// The root yields the separator alone. Every other node yields its
    /// ancestors' segments, root excluded, each preceded by the separator.
    /// Returns an empty string for invalid IDs.
    pub fn path(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        if node.is_root() {
            return self.separator.to_string();
        }

        let mut segments = vec![node.segment()];
        let mut current = node.parent();
        while let Some(parent_id) = current {
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            if parent.is_root() {
                break;
            }
            segments.push(parent.segment());
            current = parent.parent();
        }

        let mut path = String::new();
        for segment in segments.into_iter().rev() {
            path.push(self.separator);
            path.push_str(segment);
        }
        path
    }
}

impl Tree for PathTrie {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.get())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TraversalOrder, TreeTraversal};
    use pretty_assertions::assert_eq;

    fn link(trie: &mut PathTrie, parent: NodeId, segment: &str) -> NodeId {
        let id = trie.new_node(parent, segment);
        trie.add_child(parent, id);
        id
    }

    #[test]
    fn test_new_root() {
        let trie = PathTrie::new();
        let root = trie.root();
        assert!(trie.is_root(root));
        assert_eq!(trie.parent(root), None);
        assert_eq!(trie.score(root), 0);
        assert_eq!(trie.path(root), "/");
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_new_node_is_unlinked() {
        let mut trie = PathTrie::new();
        let a = trie.new_node(NodeId::ROOT, "a");
        assert_eq!(trie.score(a), 0);
        assert_eq!(trie.parent(a), Some(NodeId::ROOT));
        assert!(!trie.is_root(a));
        assert!(trie.children_of(NodeId::ROOT).is_empty());
        assert_eq!(trie.get_child(NodeId::ROOT, "a"), None);
    }

    #[test]
    fn test_path_of_chain() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let b = link(&mut trie, a, "b");
        assert_eq!(trie.path(a), "/a");
        assert_eq!(trie.path(b), "/a/b");
    }

    #[test]
    fn test_add_child_scores_only_the_child() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let x = link(&mut trie, NodeId::ROOT, "x");
        let b = trie.new_node(a, "b");

        trie.add_child(a, b);

        assert_eq!(trie.score(b), 1);
        assert_eq!(trie.score(a), 1);
        assert_eq!(trie.score(x), 1);
        assert_eq!(trie.score(NodeId::ROOT), 0);
    }

    #[test]
    fn test_duplicate_add_child_scores_twice() {
        // Linking the same node twice is a caller error the trie does not catch.
        let mut trie = PathTrie::new();
        let a = trie.new_node(NodeId::ROOT, "a");
        trie.add_child(NodeId::ROOT, a);
        trie.add_child(NodeId::ROOT, a);
        assert_eq!(trie.score(a), 2);
        assert_eq!(trie.children_of(NodeId::ROOT), &[a, a]);
    }

    #[test]
    fn test_get_child() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let b = link(&mut trie, NodeId::ROOT, "b");
        assert_eq!(trie.get_child(NodeId::ROOT, "a"), Some(a));
        assert_eq!(trie.get_child(NodeId::ROOT, "b"), Some(b));
        assert_eq!(trie.get_child(NodeId::ROOT, "A"), None);
        assert_eq!(trie.get_child(NodeId::ROOT, "c"), None);
        assert_eq!(trie.get_child(a, "a"), None);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut trie = PathTrie::new();
        let z = link(&mut trie, NodeId::ROOT, "z");
        let y = link(&mut trie, NodeId::ROOT, "y");
        let x = link(&mut trie, NodeId::ROOT, "x");
        assert_eq!(trie.children_of(NodeId::ROOT), &[z, y, x]);
    }

    #[test]
    fn test_increment_score() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        trie.increment_score(a);
        trie.increment_score(a);
        assert_eq!(trie.score(a), 3);
    }

    #[test]
    fn test_custom_separator() {
        let mut trie = PathTrie::with_separator('.');
        let com = link(&mut trie, NodeId::ROOT, "com");
        let example = link(&mut trie, com, "example");
        assert_eq!(trie.separator(), '.');
        assert_eq!(trie.path(NodeId::ROOT), ".");
        assert_eq!(trie.path(example), ".com.example");
    }

    #[test]
    fn test_invalid_ids() {
        let mut trie = PathTrie::new();
        let bogus = NodeId(42);
        assert_eq!(trie.score(bogus), 0);
        assert!(!trie.is_root(bogus));
        assert!(trie.children_of(bogus).is_empty());
        assert_eq!(trie.get_child(bogus, "a"), None);
        assert_eq!(trie.path(bogus), "");

        trie.add_child(NodeId::ROOT, bogus);
        trie.add_child(bogus, NodeId::ROOT);
        trie.increment_score(bogus);
        assert!(trie.children_of(NodeId::ROOT).is_empty());
        assert_eq!(trie.score(NodeId::ROOT), 0);
    }

    #[test]
    fn test_new_node_with_unknown_parent_hangs_off_root() {
        let mut trie = PathTrie::new();
        let x = trie.new_node(NodeId(1), "x");
        assert_eq!(x, NodeId(1));
        assert_eq!(trie.parent(x), Some(NodeId::ROOT));
        assert_eq!(trie.depth(x), 1);
        assert_eq!(trie.ancestors(x), vec![NodeId::ROOT]);
        assert_eq!(trie.path(x), "/x");

        trie.add_child(NodeId::ROOT, x);
        assert_eq!(trie.children_of(NodeId::ROOT), &[x]);
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let b = link(&mut trie, a, "b");

        trie.add_child(a, NodeId::ROOT);
        trie.add_child(b, a);
        trie.add_child(a, a);

        assert!(trie.children_of(a).iter().all(|&c| c == b));
        assert!(trie.children_of(b).is_empty());
        assert_eq!(trie.score(NodeId::ROOT), 0);
        assert_eq!(trie.score(a), 1);
        let walked: Vec<_> = trie.walk(TraversalOrder::PreOrder).collect();
        assert_eq!(walked, vec![NodeId::ROOT, a, b]);
    }

    #[test]
    fn test_add_child_rejects_foreign_parent() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let x = link(&mut trie, NodeId::ROOT, "x");
        let b = trie.new_node(a, "b");

        trie.add_child(x, b);

        assert!(trie.children_of(x).is_empty());
        assert_eq!(trie.score(b), 0);
    }

    #[test]
    fn test_node_display_is_segment() {
        let mut trie = PathTrie::new();
        let a = link(&mut trie, NodeId::ROOT, "a");
        let b = link(&mut trie, a, "b");
        assert_eq!(trie.get(b).map(ToString::to_string), Some("b".to_string()));
    }
}
