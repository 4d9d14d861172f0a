//! Path Trie Library
//!
//! An in-memory trie of path segments that scores every node by how many
//! observed paths pass through it. Used to find the directory that recurs
//! most often across a set of individually reported paths.
//!
//! # Core Concepts
//!
//! - **PathTrie**: arena owning every node, addressed by `NodeId`
//! - **Node**: one path segment with its parent handle, children and score
//! - **Tree**: navigation trait (parents, children, depth, traversal)
//!
//! # Example
//!
//! ```
//! use path_trie::prelude::*;
//!
//! let mut trie = PathTrie::new();
//! trie.extend(["/var/log/syslog", "/var/log/auth.log", "/etc/hosts"]);
//!
//! let hottest = trie.hottest(2);
//! assert_eq!(trie.path(hottest), "/var/log");
//! assert_eq!(trie.score(hottest), 2);
//!
//! for id in trie.walk(TraversalOrder::PreOrder) {
//!     let depth = trie.depth(id);
//!     println!("{:indent$}{} ({})", "", trie.path(id), trie.score(id), indent = depth * 2);
//! }
//! ```

pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
}
