use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and exclusively owns its (possibly absent) left
/// and right children.
///
/// Nodes are only ever handed out by shared reference from a [`Tree`][crate::Tree]
/// so the BST invariant can't be broken from outside the crate.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The present children of this node, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest downward path from this node to a
    /// leaf. A leaf has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::construct([1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.root().map(|root| root.height()), Some(2));
    /// assert_eq!(tree.find(&4).map(|leaf| leaf.height()), Some(0));
    /// ```
    pub fn height(&self) -> usize {
        let mut frontier = vec![self];
        let mut next = Vec::new();
        let mut height = 0;
        loop {
            next.extend(frontier.drain(..).flat_map(Self::children));
            if next.is_empty() {
                return height;
            }
            std::mem::swap(&mut frontier, &mut next);
            height += 1;
        }
    }

    /// Compare `value` against the value stored in this node.
    pub(crate) fn direction(&self, value: &T) -> Ordering
    where
        T: Ord,
    {
        value.cmp(&self.value)
    }
}

/// Shows the node's value and the values of its direct children only. Use
/// [`Tree`][crate::Tree]'s `Debug` or [`Tree::pretty`][crate::Tree::pretty]
/// to see a whole tree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Self::value))
            .field("right", &self.right().map(Self::value))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_no_children() {
        let node = Node::new(1);

        assert!(node.is_leaf());
        assert_eq!(node.children().count(), 0);
        assert_eq!(node.height(), 0);
    }

    #[test]
    fn children_are_left_then_right() {
        let mut node = Node::new(5);
        node.left = Some(Node::boxed(3));
        node.right = Some(Node::boxed(8));

        let children: Vec<_> = node.children().map(Node::value).collect();
        assert_eq!(children, [&3, &8]);
        assert!(!node.is_leaf());
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn height_follows_longest_path() {
        // 5 -> 3 -> 4 on the left, a lone 8 on the right.
        let mut three = Node::new(3);
        three.right = Some(Node::boxed(4));
        let mut node = Node::new(5);
        node.left = Some(Box::new(three));
        node.right = Some(Node::boxed(8));

        assert_eq!(node.height(), 2);
        assert_eq!(node.left().map(Node::height), Some(1));
        assert_eq!(node.right().map(Node::height), Some(0));
    }

    #[test]
    fn debug_shows_direct_children_only() {
        let mut three = Node::new(3);
        three.right = Some(Node::boxed(4));
        let mut node = Node::new(5);
        node.left = Some(Box::new(three));

        assert_eq!(
            format!("{:?}", node),
            "Node { value: 5, left: Some(3), right: None }"
        );
    }

    #[test]
    fn direction_compares_against_stored_value() {
        let node = Node::new(5);

        assert_eq!(node.direction(&3), Ordering::Less);
        assert_eq!(node.direction(&5), Ordering::Equal);
        assert_eq!(node.direction(&8), Ordering::Greater);
    }
}
