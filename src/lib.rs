//! This crate exposes a classic in-memory Binary Search Tree (BST)
//! with explicit, on-demand rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! This tree does *not* rebalance itself as values come and go. Building
//! from a sorted sequence yields a tree of height `⌊lg N⌋`, but a hostile
//! insertion order can degrade it all the way to a linked list. Callers
//! check [`Tree::is_balanced`] and call [`Tree::rebalance`] when they care.
//!
//! The four traversal orders ([`Tree::level_order`], [`Tree::pre_order`],
//! [`Tree::in_order`], [`Tree::post_order`]) are iterative, driven by the
//! [`scratch`] stack and queue rather than recursion, so traversal depth
//! never grows the call stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod scratch;
#[cfg(test)]
mod test;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{Link, Node, Tree};
