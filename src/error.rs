//! Error types for BST and scratch-container operations.
//!
//! Misses are not errors: [`Tree::find`](crate::Tree::find) returns `None`
//! and removing an absent value is a no-op. Only the two conditions below
//! surface as [`Error`]s.

use thiserror::Error;

/// Errors that can occur during tree or scratch-container operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Insert was called with a value the tree already contains. The tree
    /// holds a strict ordering with no duplicates, so the insert is refused
    /// and the tree is left untouched.
    #[error("value is already present in the tree")]
    DuplicateValue,

    /// Pop or dequeue was called on an empty scratch container.
    #[error("container is empty")]
    EmptyContainer,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
