//! Point insertion and deletion.
//!
//! Neither operation restructures the tree beyond the nodes it touches.

use std::cmp::Ordering;

use tracing::trace;

use super::Tree;
use crate::node::{Link, Node};

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` as a new leaf. Returns whether the value was inserted;
    /// inserting a value that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::construct([5, 3, 8]);
    ///
    /// assert!(tree.insert(4));
    /// assert!(!tree.insert(4));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 8]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match node.direction(&value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(len = self.len, "ignored duplicate insert");
                    return false;
                }
            };
        }

        *link = Some(Node::boxed(value));
        self.len += 1;
        trace!(len = self.len, "inserted value");
        true
    }

    /// Deletes the node holding `value`. Returns whether a node was removed;
    /// deleting a value that isn't present leaves the tree unchanged.
    ///
    /// A node with two children takes the value of its in-order successor
    /// (the smallest value of its right subtree), and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::construct([1, 3, 4, 5, 8]);
    ///
    /// assert!(tree.delete(&5));
    /// assert!(!tree.delete(&5));
    /// assert!(tree.find(&5).is_none());
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        let link = Self::link_to(&mut self.root, value);
        let Some(mut node) = link.take() else {
            return false;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = detach_min(&mut node.right) {
                    node.value = successor;
                }
                Some(node)
            }
        };

        self.len -= 1;
        trace!(len = self.len, "deleted value");
        true
    }

    /// Finds the link that holds `value`, or the empty link where it would be
    /// inserted.
    fn link_to<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        loop {
            // Decide the direction before borrowing a child so that stopping
            // here doesn't keep `link` borrowed.
            let ordering = match link.as_deref() {
                Some(node) => node.direction(value),
                None => return link,
            };
            if ordering == Ordering::Equal {
                return link;
            }
            let Some(node) = link else {
                return link;
            };
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

/// Detaches the leftmost node of the subtree, splicing its right child into
/// its place, and returns its value.
fn detach_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();

    Some(node.value)
}
