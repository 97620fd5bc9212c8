//! Lookups relative to a located node.
//!
//! Every query here returns `None` when the value isn't in the tree, which
//! keeps "not found" distinct from a height or depth of 0.

use std::cmp::Ordering;

use super::Tree;
use crate::node::Node;

impl<T> Tree<T>
where
    T: Ord,
{
    /// Potentially finds the node holding `value`. If no node holds it, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([1, 2]);
    ///
    /// assert_eq!(tree.find(&1).map(|node| *node.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.find_with_depth(value).map(|(node, _)| node)
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The height of the node holding `value`: the number of edges on the
    /// longest path down to a leaf. Leaves have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.height(&3), Some(2));
    /// assert_eq!(tree.height(&8), Some(0));
    /// assert_eq!(tree.height(&4), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize> {
        self.find(value).map(Node::height)
    }

    /// The depth of the node holding `value`: the number of edges from the
    /// root down to it. The root has a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([1, 3, 5, 8]);
    ///
    /// assert_eq!(tree.depth(&3), Some(0));
    /// assert_eq!(tree.depth(&8), Some(2));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize> {
        self.find_with_depth(value).map(|(_, depth)| depth)
    }

    fn find_with_depth(&self, value: &T) -> Option<(&Node<T>, usize)> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match node.direction(value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some((node, depth)),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }
}

impl<T> Tree<T> {
    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }
}
