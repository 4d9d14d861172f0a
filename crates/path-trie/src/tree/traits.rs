//! Navigation traits for the path trie

use crate::tree::{Node, NodeId};
use std::collections::{HashSet, VecDeque};

/// A rooted hierarchy addressed by [`NodeId`]
///
/// Implementations provide the primitive navigation; depth, ancestry and
/// lookups by name are derived from those.
///
/// # Example
///
/// ```
/// use path_trie::prelude::*;
///
/// let mut trie = PathTrie::new();
/// let leaf = trie.insert("/a/b/c");
/// assert_eq!(trie.depth(leaf), 3);
/// assert_eq!(trie.ancestors(leaf).len(), 3);
/// ```
pub trait Tree {
    /// Get the root node ID (always exists)
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&Node>;

    /// Get the parent of a node
    ///
    /// Returns `None` for the root node and invalid IDs.
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Iterate over children of a node in insertion order
    ///
    /// Returns an empty iterator for invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match self.get(id) {
            Some(node) => Box::new(node.children().iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Count total nodes in the tree
    fn node_count(&self) -> usize;

    /// Get the segment label of a node
    fn segment(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Node::segment)
    }

    /// Get the depth of a node (root = 0)
    ///
    /// Returns 0 for invalid IDs.
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Count children of a node
    fn child_count(&self, id: NodeId) -> usize {
        self.get(id).map(|n| n.children().len()).unwrap_or(0)
    }

    /// Returns true if the node exists and has no children
    fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).map(|n| n.children().is_empty()).unwrap_or(false)
    }

    /// Get all ancestors of a node, from parent to root
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Check if a node is an ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing traversal and search utilities
///
/// Automatically implemented for every [`Tree`].
pub trait TreeTraversal: Tree {
    /// Walk the tree from the root in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, self.root(), order)
    }

    /// Walk the subtree starting at a specific node
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// All nodes without children
    fn leaves(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_leaf(id))
            .collect()
    }

    /// Find nodes matching a predicate, in pre-order
    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Find a node by segment (first pre-order match only)
    fn find_by_segment(&self, segment: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.segment(id) == Some(segment))
    }

    /// Find every node carrying a given segment, at any depth
    fn find_all_by_segment(&self, segment: &str) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.find(|n| n.segment() == segment)
    }
}

impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a tree in different orders
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new walker starting from the given node
    ///
    /// Yields nothing if `start` is not a node of `tree`.
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back(start);
        }
        Self {
            tree,
            order,
            pending,
            visited: HashSet::new(),
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_back()?;

        // Reverse so the first child is popped next
        let children: Vec<_> = self.tree.children(current).collect();
        self.pending.extend(children.into_iter().rev());

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(&current) = self.pending.back() {
            if !self.visited.insert(current) {
                self.pending.pop_back();
                return Some(current);
            }

            let children: Vec<_> = self.tree.children(current).collect();
            self.pending.extend(children.into_iter().rev());
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_front()?;
        self.pending.extend(self.tree.children(current));
        Some(current)
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
