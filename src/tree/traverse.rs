//! The four traversal orders.
//!
//! Each order is available as a lazy iterator over `&Node<T>` (e.g.
//! [`Tree::pre_order`]) and as a visitor method (e.g.
//! [`Tree::pre_order_for_each`]). [`Tree::walk`] picks the order at runtime.
//! None of them recurse, so a degenerate tree can be walked at any depth.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{Order, Tree};
//!
//! let tree = Tree::construct([1, 3, 5, 8]);
//! let values = |order| {
//!     tree.traverse(order)
//!         .map(|node| *node.value())
//!         .collect::<Vec<_>>()
//! };
//!
//! assert_eq!(values(Order::Level), [3, 1, 5, 8]);
//! assert_eq!(values(Order::Pre), [3, 1, 5, 8]);
//! assert_eq!(values(Order::In), [1, 3, 5, 8]);
//! assert_eq!(values(Order::Post), [1, 8, 5, 3]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use super::Tree;
use crate::node::Node;
use crate::TreeError;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then each level left to right.
    Level,
    /// Depth first: a node, then its left subtree, then its right subtree.
    Pre,
    /// Depth first: the left subtree, then the node, then the right subtree.
    /// Values come out in ascending order.
    In,
    /// Depth first: the left subtree, then the right subtree, then the node.
    Post,
}

impl Order {
    /// Every order, in the order they are usually listed.
    pub const ALL: [Order; 4] = [Order::Level, Order::Pre, Order::In, Order::Post];

    /// A short lowercase name that [`FromStr`] accepts back.
    pub fn name(self) -> &'static str {
        match self {
            Order::Level => "level",
            Order::Pre => "pre",
            Order::In => "in",
            Order::Post => "post",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Level => "level order",
            Order::Pre => "pre-order",
            Order::In => "in-order",
            Order::Post => "post-order",
        };
        f.write_str(name)
    }
}

impl FromStr for Order {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "level" | "levelorder" | "bfs" => Ok(Order::Level),
            "pre" | "preorder" => Ok(Order::Pre),
            "in" | "inorder" => Ok(Order::In),
            "post" | "postorder" => Ok(Order::Post),
            _ => Err(TreeError::UnknownOrder(s.to_string())),
        }
    }
}

/// Breadth-first iterator. Created by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Pre-order iterator. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// In-order iterator. Created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being walked.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Post-order iterator. Created by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have been scheduled yet.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}

/// An iterator in any of the four [`Order`]s. Created by [`Tree::traverse`].
pub enum Traversal<'a, T> {
    /// See [`LevelOrder`].
    Level(LevelOrder<'a, T>),
    /// See [`PreOrder`].
    Pre(PreOrder<'a, T>),
    /// See [`InOrder`].
    In(InOrder<'a, T>),
    /// See [`PostOrder`].
    Post(PostOrder<'a, T>),
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Level(iter) => iter.next(),
            Self::Pre(iter) => iter.next(),
            Self::In(iter) => iter.next(),
            Self::Post(iter) => iter.next(),
        }
    }
}

impl<T> FusedIterator for Traversal<'_, T> {}

impl<T> Tree<T> {
    /// Iterates over the nodes breadth first, each level left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the nodes in pre-order.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the nodes in in-order, i.e. by ascending value.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Iterates over the nodes in post-order.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|n| (n, false)).into_iter().collect(),
        }
    }

    /// Iterates over the nodes in the given `order`.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        match order {
            Order::Level => Traversal::Level(self.level_order()),
            Order::Pre => Traversal::Pre(self.pre_order()),
            Order::In => Traversal::In(self.in_order()),
            Order::Post => Traversal::Post(self.post_order()),
        }
    }

    /// Calls `visitor` on every node, breadth first.
    pub fn level_order_for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.level_order().for_each(visitor)
    }

    /// Calls `visitor` on every node in pre-order.
    pub fn pre_order_for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.pre_order().for_each(visitor)
    }

    /// Calls `visitor` on every node in in-order.
    pub fn in_order_for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.in_order().for_each(visitor)
    }

    /// Calls `visitor` on every node in post-order.
    pub fn post_order_for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        self.post_order().for_each(visitor)
    }

    /// Calls `visitor` on every node in the given `order`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingVisitor`] without visiting anything when no
    /// visitor is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Node, Order, Tree, TreeError};
    ///
    /// let tree = Tree::construct([2, 1, 3]);
    ///
    /// let mut seen = Vec::new();
    /// tree.walk(Order::Post, Some(&mut |node: &Node<i32>| seen.push(*node.value())))?;
    /// assert_eq!(seen, [1, 3, 2]);
    ///
    /// assert_eq!(
    ///     tree.walk(Order::In, None),
    ///     Err(TreeError::MissingVisitor { order: Order::In }),
    /// );
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn walk(
        &self,
        order: Order,
        visitor: Option<&mut dyn FnMut(&Node<T>)>,
    ) -> Result<(), TreeError> {
        let visitor = visitor.ok_or(TreeError::MissingVisitor { order })?;
        self.traverse(order).for_each(visitor);
        Ok(())
    }
}
