//! Batch construction of a height-minimal [`Tree`].

use tracing::debug;

use super::Tree;
use crate::node::{Link, Node};

impl<T> Tree<T> {
    /// Builds a tree holding every distinct value of `values`.
    ///
    /// The values are sorted and deduplicated first, so the input may be in
    /// any order and may repeat values. The middle value (the lower one for an
    /// even count) becomes the root and each half is built the same way, so
    /// `n` distinct values produce a tree of height `⌊log2(n)⌋`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([5, 3, 8, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(3));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
    /// ```
    pub fn construct<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let received = values.len();
        values.sort_unstable();
        values.dedup();
        debug!(received, distinct = values.len(), "constructing tree");

        Self::from_sorted(values)
    }

    /// Builds a tree from values that are already ascending and distinct.
    pub(crate) fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let mut values = values.into_iter();
        let root = build_range(0, len, &mut values);
        debug_assert!(values.next().is_none());

        Self { root, len }
    }
}

/// Builds the subtree covering the index range `start..end` of the sorted
/// input.
///
/// Values are pulled from `values` in ascending order while the shape is laid
/// out, so the left subtree has to be built before its parent takes a value.
fn build_range<T>(start: usize, end: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
    if start >= end {
        return None;
    }
    let mid = start + (end - 1 - start) / 2;

    let left = build_range(start, mid, values);
    let mut node = Node::boxed(values.next()?);
    node.left = left;
    node.right = build_range(mid + 1, end, values);

    Some(node)
}
