//! Sideways rendering of a [`Tree`] for the terminal.
//!
//! The right subtree is drawn above its parent and the left subtree below, so
//! reading the lines top to bottom lists the values in descending order.
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::construct([1, 3, 5, 8]);
//!
//! let expected = "\
//! │       ┌── 8
//! │   ┌── 5
//! └── 3
//!     └── 1
//! ";
//! assert_eq!(tree.pretty().to_string(), expected);
//! ```

use std::fmt;

use crate::node::Node;
use crate::Tree;

/// Displays a [`Tree`] sideways. Created by [`Tree::pretty`].
pub struct Pretty<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> Tree<T> {
    /// Returns a [`Display`][fmt::Display] adapter that draws this tree one
    /// value per line. An empty tree draws nothing.
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { root: self.root() }
    }
}

/// Pending work while drawing. A subtree is expanded into its right subtree,
/// its own line, and its left subtree.
enum Frame<'a, T> {
    Subtree {
        node: &'a Node<T>,
        prefix: String,
        is_left: bool,
    },
    Line {
        node: &'a Node<T>,
        prefix: String,
        is_left: bool,
    },
}

impl<T> fmt::Display for Pretty<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Frame<'_, T>> = self
            .root
            .map(|node| Frame::Subtree {
                node,
                prefix: String::new(),
                is_left: true,
            })
            .into_iter()
            .collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Line {
                    node,
                    prefix,
                    is_left,
                } => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, connector, node.value())?;
                }
                Frame::Subtree {
                    node,
                    prefix,
                    is_left,
                } => {
                    // Pushed in reverse: right subtree, this line, left subtree.
                    if let Some(left) = node.left() {
                        stack.push(Frame::Subtree {
                            node: left,
                            prefix: format!("{}{}", prefix, if is_left { "    " } else { "│   " }),
                            is_left: true,
                        });
                    }
                    let right_prefix =
                        format!("{}{}", prefix, if is_left { "│   " } else { "    " });
                    stack.push(Frame::Line {
                        node,
                        prefix,
                        is_left,
                    });
                    if let Some(right) = node.right() {
                        stack.push(Frame::Subtree {
                            node: right,
                            prefix: right_prefix,
                            is_left: false,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
