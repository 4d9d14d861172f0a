//! Path-segment trie with traversal scores
//!
//! Paths are decomposed into segments and stored as a chain of nodes hanging
//! off a single root. Each node counts how many inserted paths pass through
//! it, which makes the most frequently recurring prefixes easy to find.

mod node;
mod traits;
mod trie;
mod walk;

pub use node::{Node, NodeId};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};
pub use trie::{PathTrie, DEFAULT_SEPARATOR};
pub use walk::split_segments;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        split_segments, Node, NodeId, PathTrie, TraversalOrder, Tree, TreeTraversal,
    };
}
