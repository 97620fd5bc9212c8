use thiserror::Error;

use crate::Order;

/// Errors reported by [`Tree`][crate::Tree] operations.
///
/// Lookups of missing values are not errors: they return `None`. Likewise
/// inserting a duplicate or deleting a missing value is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A traversal was requested without a visitor to call for each node.
    #[error("a visitor is required for {order} traversal")]
    MissingVisitor {
        /// The traversal that was requested.
        order: Order,
    },

    /// A traversal order name could not be parsed.
    #[error("unknown traversal order `{0}` (expected one of: level, pre, in, post)")]
    UnknownOrder(String),
}
