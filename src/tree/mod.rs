//! The [`Tree`] itself and its owning iterators.
//!
//! The operations on a tree are split by concern:
//!
//! * [`build`] - batch construction of a height-minimal tree.
//! * [`mutate`] - point insertion and deletion.
//! * [`locate`] - lookups and height/depth queries.
//! * [`traverse`] - the four traversal orders as iterators and visitors.
//! * [`balance`] - the balance check and rebuild-based rebalancing.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::construct([5, 3, 8, 3, 1]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//!
//! tree.insert(4);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//!
//! tree.delete(&5);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 8]);
//! assert!(tree.find(&5).is_none());
//! ```

pub mod balance;
pub mod build;
pub mod locate;
pub mod mutate;
pub mod traverse;

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// A Binary Search Tree over unique values of `T`.
///
/// The tree is never restructured by [`insert`][Tree::insert] or
/// [`delete`][Tree::delete]. Call [`rebalance`][Tree::rebalance] to restore a
/// minimal height after a run of skewed mutations.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }

    /// Moves the root out of the tree, leaving it empty.
    fn take_root(&mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }
}

/// Drops a subtree without recursing once per level.
fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::construct(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        IntoIter::new(self.take_root(), len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the values of a [`Tree`] in ascending order.
///
/// Created by [`Tree::into_iter`]. Nodes are released as they are yielded.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            release(Some(node));
        }
    }
}

/// An iterator over references to the values of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    inner: traverse::InOrder<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next()?;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Tree<T> {
    /// Iterates over the values of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([3, 1, 2]);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.in_order(),
            remaining: self.len,
        }
    }
}
