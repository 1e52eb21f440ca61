//! The binary search tree itself.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! assert!(tree.find(&4).is_some());
//! assert!(tree.is_balanced());
//!
//! // Inserting a duplicate is refused.
//! assert!(tree.insert(4).is_err());
//!
//! // Removing a node with two children promotes its in-order successor.
//! tree.remove(&4);
//! assert!(tree.find(&4).is_none());
//! assert_eq!(tree.root().map(|n| &n.value), Some(&5));
//! ```

use std::cmp::Ordering;
use std::ptr;

use crate::error::{Error, Result};
use crate::scratch::{Queue, Stack};

/// An owning edge of the tree: either a boxed child node or the absence of
/// one. Absence stands for both "empty subtree" and "not found" and is never
/// an error.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single tree vertex: a value and two owned child links.
///
/// `Node` is a pure data holder. It has no parent pointer and no methods
/// beyond construction; the ordering invariant is enforced by [`Tree`], not
/// by the node. Dropping a node drops its whole subtree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<T> {
    /// The value stored at this vertex.
    pub value: T,
    /// The left subtree, holding values less than `value`.
    pub left: Link<T>,
    /// The right subtree, holding values greater than `value`.
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Constructs a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree holding a strictly ordered set of values. This can
/// be used for inserting, finding, and deleting values, traversing them in
/// four orders, and measuring and restoring balance.
///
/// The tree never rebalances itself behind your back; see
/// [`Tree::rebalance`].
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from a strictly ascending,
    /// deduplicated sequence of values by recursive midpoint selection.
    /// The result has height `⌊lg N⌋`.
    ///
    /// The precondition is not checked: passing values that are unsorted or
    /// contain duplicates produces a tree that violates the search
    /// invariant, and every later operation on it is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.root().map(|n| &n.value), Some(&4));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self {
        Self {
            root: build(values),
        }
    }

    /// Read-only access to the root node, for consumers (printers,
    /// renderers) that walk `value`/`left`/`right` themselves. `None` for
    /// the empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree. Counted by traversal, `O(N)`.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Inserts `value` into the tree by recursive descent.
    ///
    /// Fails with [`Error::DuplicateValue`] if the value is already
    /// present, leaving the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        insert(&mut self.root, value)
    }

    /// Potentially finds the node holding `value`. If no node holds it,
    /// `None` is returned; a miss is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| &n.value), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        find(&self.root, value)
    }

    /// Deletes the node holding `value` from the tree. A node with at most
    /// one child is spliced out; a node with two children adopts the value
    /// of its in-order successor (the smallest value in its right subtree),
    /// which is then removed from that subtree instead.
    ///
    /// Removing a value that isn't present does nothing. It is not an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::from_sorted(vec![1, 2, 3]);
    /// tree.remove(&2);
    /// tree.remove(&42); // no-op
    ///
    /// assert_eq!(tree.find(&2), None);
    /// assert!(tree.find(&1).is_some());
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        remove(&mut self.root, value);
    }

    /// Visits every node breadth-first, top to bottom and left to right,
    /// using a FIFO queue as bookkeeping. A no-op on the empty tree.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut queue = Queue::new();
        if let Some(root) = self.root.as_deref() {
            queue.enqueue(root);
        }

        while let Ok(node) = queue.dequeue() {
            visit(node);
            if let Some(left) = node.left.as_deref() {
                queue.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.enqueue(right);
            }
        }
    }

    /// Visits every node in node, left subtree, right subtree order, using
    /// a LIFO stack as bookkeeping. The right child is pushed before the
    /// left so that the left is popped first. A no-op on the empty tree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }

        while let Ok(node) = stack.pop() {
            visit(node);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
    }

    /// Visits every node in left subtree, node, right subtree order (i.e.
    /// ascending value order), descending left spines onto a LIFO stack and
    /// unwinding them. A no-op on the empty tree.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut stack = Stack::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }

            match stack.pop() {
                Ok(node) => {
                    visit(node);
                    current = node.right.as_deref();
                }
                Err(_) => break,
            }
        }
    }

    /// Visits every node in left subtree, right subtree, node order. A
    /// last-visited marker distinguishes "right subtree still pending" from
    /// "right subtree done, emit the node". A no-op on the empty tree.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut stack: Stack<&Node<T>> = Stack::new();
        let mut current = self.root.as_deref();
        let mut last_visited: Option<&Node<T>> = None;

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }

            let top = match stack.peek() {
                Some(&top) => top,
                None => break,
            };

            match top.right.as_deref() {
                // Identity, not value: the marker must match this exact
                // node even though values are unique, since the marker is
                // compared before looking at the value at all.
                Some(right) if last_visited.map_or(true, |last| !ptr::eq(last, right)) => {
                    current = Some(right);
                }
                _ => {
                    visit(top);
                    last_visited = stack.pop().ok();
                }
            }
        }
    }

    /// An iterator over the values in ascending order. The lazy counterpart
    /// of [`Tree::in_order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    /// let values: Vec<i32> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: Stack::new(),
            current: self.root.as_deref(),
        }
    }

    /// The height of the tree: the longest path from the root to a leaf,
    /// counted in edges. `-1` for the empty tree, `0` for a single node.
    pub fn height(&self) -> isize {
        Self::height_of(self.root.as_deref())
    }

    /// The height of the subtree rooted at `node`, with `None` (the empty
    /// subtree) at `-1`. Recomputed on every call, `O(N)`.
    pub fn height_of(node: Option<&Node<T>>) -> isize {
        match node {
            None => -1,
            Some(node) => {
                1 + Self::height_of(node.left.as_deref()).max(Self::height_of(node.right.as_deref()))
            }
        }
    }

    /// The number of edges between the root and `node`, found by re-walking
    /// the search path for `node`'s value. `-1` for `None` (pairs with the
    /// miss case of [`Tree::find`]).
    ///
    /// Because the walk compares values rather than tracking identity, the
    /// answer is only meaningful for a node actually reachable from this
    /// tree's root. A node from some other tree whose value happens to be
    /// present here reports that value's depth *here*, and a value nowhere
    /// on its search path reports `-1`. See the crate's DESIGN notes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.depth(tree.find(&4)), 0);
    /// assert_eq!(tree.depth(tree.find(&1)), 2);
    /// assert_eq!(tree.depth(tree.find(&42)), -1);
    /// ```
    pub fn depth(&self, node: Option<&Node<T>>) -> isize
    where
        T: Ord,
    {
        let target = match node {
            None => return -1,
            Some(node) => node,
        };

        let mut steps = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match target.value.cmp(&node.value) {
                Ordering::Equal => return steps,
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
            steps += 1;
        }

        -1
    }

    /// Whether every node's left and right subtrees are within one level of
    /// each other in height (the AVL notion of balance, not perfect
    /// balance).
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root.as_deref()).is_some()
    }

    /// Rebuilds the tree into balanced shape: the values are drained in
    /// ascending order and fed back through the midpoint build, `O(N)` in
    /// both halves.
    ///
    /// Every previously obtained `&Node` is invalidated (the borrow checker
    /// enforces this); the new tree holds the same values in fresh nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=10 {
    ///     tree.insert(x).unwrap();
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        drain_in_order(self.root.take(), &mut values);
        self.root = build(values);
    }

    /// The node holding the smallest value, found by descending left from
    /// the root. `None` for the empty tree.
    pub fn smallest(&self) -> Option<&Node<T>> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node)
    }

    /// The node holding the largest value, found by descending right from
    /// the root. `None` for the empty tree.
    pub fn largest(&self) -> Option<&Node<T>> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over borrowed values, created by [`Tree::iter`].
///
/// Holds a stack of not-yet-unwound ancestors, so it is lazy: each `next`
/// does only the work for one value.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop().ok()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

fn build<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    // Floor midpoint of the index range, so `[1..=7]` roots at 4.
    let mid = (values.len() - 1) / 2;
    let mut rest = values.split_off(mid);
    let value = rest.remove(0);

    Some(Box::new(Node {
        value,
        left: build(values),
        right: build(rest),
    }))
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> Result<()> {
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            Ok(())
        }
        Some(node) => {
            match value.cmp(&node.value) {
                Ordering::Equal => return Err(Error::DuplicateValue),
                Ordering::Less => insert(&mut node.left, value)?,
                Ordering::Greater => insert(&mut node.right, value)?,
            }

            if cfg!(debug_assertions) {
                if let Some(left) = &node.left {
                    assert!(left.value < node.value);
                }
                if let Some(right) = &node.right {
                    assert!(right.value > node.value);
                }
            }
            Ok(())
        }
    }
}

fn find<'a, T: Ord>(link: &'a Link<T>, value: &T) -> Option<&'a Node<T>> {
    let node = link.as_deref()?;
    match value.cmp(&node.value) {
        Ordering::Less => find(&node.left, value),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(&node.right, value),
    }
}

fn remove<T: Ord>(link: &mut Link<T>, value: &T) {
    let node = match link {
        None => return,
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Two children: this node adopts its in-order successor's
            // value, and the successor - which has no left child - is
            // spliced out of the right subtree instead.
            if let Some(successor) = take_smallest(&mut node.right) {
                node.value = successor;
            }
        }
        Ordering::Equal => {
            if let Some(removed) = link.take() {
                *link = removed.left.or(removed.right);
            }
        }
    }
}

/// Detaches the smallest node of the subtree at `link` and returns its
/// value, replacing the node with its right child.
fn take_smallest<T>(link: &mut Link<T>) -> Option<T> {
    match link {
        None => None,
        Some(node) if node.left.is_some() => take_smallest(&mut node.left),
        Some(_) => link.take().map(|node| {
            let node = *node;
            *link = node.right;
            node.value
        }),
    }
}

/// `Some(height)` if the subtree is height-balanced at every node, `None`
/// as soon as any node is off by more than one level.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let node = match node {
        None => return Some(-1),
        Some(node) => node,
    };

    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;

    if (left - right).abs() <= 1 {
        Some(1 + left.max(right))
    } else {
        None
    }
}

fn drain_in_order<T>(link: Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        let node = *node;
        drain_in_order(node.left, out);
        out.push(node.value);
        drain_in_order(node.right, out);
    }
}
