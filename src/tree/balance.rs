//! Checking and restoring balance.
//!
//! Insertion and deletion never rotate nodes, so the tree can drift arbitrarily
//! far from balanced. Balance is restored only when asked for, by rebuilding
//! the whole tree from its sorted values.

use tracing::{debug, Level};

use super::Tree;

impl<T> Tree<T> {
    /// Whether, at every node, the heights of the left and right subtrees
    /// differ by at most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::construct([1, 2, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        // Post-order finishes both subtrees of a node right before the node,
        // so their level counts are the top of the stack, right above left.
        let mut levels: Vec<usize> = Vec::new();
        for node in self.post_order() {
            let right = match node.right() {
                Some(_) => levels.pop().unwrap_or_default(),
                None => 0,
            };
            let left = match node.left() {
                Some(_) => levels.pop().unwrap_or_default(),
                None => 0,
            };
            if left.abs_diff(right) > 1 {
                return false;
            }
            levels.push(left.max(right) + 1);
        }

        true
    }

    /// Rebuilds the tree so it has minimal height, keeping the same values.
    ///
    /// The values are drained in ascending order and handed to the same
    /// construction [`Tree::construct`] uses, so afterwards
    /// [`is_balanced`][Tree::is_balanced] is true. The resulting shape depends
    /// only on the values, not on the previous shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend(0..100);
    /// assert_eq!(tree.height(&0), Some(99));
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.root().map(|root| root.height()), Some(6));
    /// assert!(tree.iter().copied().eq(0..100));
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = if tracing::enabled!(Level::DEBUG) {
            self.root().map(|root| root.height())
        } else {
            None
        };
        let values: Vec<T> = std::mem::take(self).into_iter().collect();
        *self = Self::from_sorted(values);

        debug!(
            len = self.len,
            ?height_before,
            height_after = ?self.root().map(|root| root.height()),
            "rebalanced tree"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_balanced() {
        assert!(Tree::<i32>::new().is_balanced());
    }

    #[test]
    fn constructed_trees_are_balanced() {
        for n in 0..200 {
            assert!(Tree::construct(0..n).is_balanced(), "n = {}", n);
        }
    }

    #[test]
    fn two_level_difference_is_unbalanced() {
        let mut tree = Tree::new();
        tree.extend([2, 1, 3, 4]);
        assert!(tree.is_balanced());

        tree.insert(5);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn unbalanced_subtree_is_detected_below_a_balanced_root() {
        // The root's subtrees have equal heights, but 2 only has the right
        // chain 3 -> 4 and 8 only has the left chain 7 -> 6.
        let mut tree = Tree::new();
        tree.extend([5, 2, 8, 3, 7, 4, 6]);

        assert_eq!(tree.height(&2), tree.height(&8));
        assert!(!tree.is_balanced());
    }

    #[test]
    fn rebalance_restores_balance_and_values() {
        let mut tree = Tree::construct(1..=10);
        assert!(tree.is_balanced());

        for x in 11..=16 {
            tree.insert(x);
        }
        assert!(!tree.is_balanced());

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 16);
        assert!(tree.iter().copied().eq(1..=16));
    }

    #[test]
    fn rebalance_matches_construct() {
        let mut tree = Tree::new();
        tree.extend([9, 1, 8, 2, 7, 3, 6, 4, 5]);
        tree.rebalance();

        let built = Tree::construct(1..=9);
        let shape = |tree: &Tree<i32>| -> Vec<i32> {
            tree.level_order().map(|n| *n.value()).collect()
        };
        assert_eq!(shape(&tree), shape(&built));
    }

    #[test]
    fn rebalance_empty_tree() {
        let mut tree = Tree::<i32>::new();
        tree.rebalance();

        assert!(tree.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn rebalance_with_debug_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();
        let mut tree = crate::tree::tests::right_skewed(1_000);

        tracing::subscriber::with_default(subscriber, || tree.rebalance());
        assert!(tree.is_balanced());
        assert!(tree.iter().copied().eq(0..1_000));
    }

    #[test]
    fn balance_check_handles_deep_chains() {
        let mut tree = crate::tree::tests::right_skewed(100_000);
        assert!(!tree.is_balanced());

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 100_000);
        assert_eq!(tree.root().map(|root| root.height()), Some(16));
    }
}
