//! This crate exposes a Binary Search Tree (BST) over a set of unique values
//! that is balanced on request by rebuilding it rather than by rotating nodes
//! on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value
//! that was inserted and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). With clever
//! construction the height of a BST can be limited to `O(lg N)` where `N` is the
//! number of nodes in the tree. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Rebuild-based balancing
//!
//! [`Tree::construct`] sorts and deduplicates its input and then builds a tree of
//! minimal height by repeatedly choosing the middle element as the subtree root.
//! [`Tree::insert`] and [`Tree::delete`] never restructure the tree so a run of
//! ascending inserts degrades it into a list. [`Tree::is_balanced`] reports when
//! that has happened and [`Tree::rebalance`] flattens the tree and builds it again.
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::construct(1..=10);
//! assert!(tree.is_balanced());
//!
//! for x in 11..=16 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert!(tree.iter().copied().eq(1..=16));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod pretty;
#[cfg(test)]
mod test;
pub mod tree;

pub use error::TreeError;
pub use node::Node;
pub use tree::traverse::Order;
pub use tree::Tree;
