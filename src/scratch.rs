//! LIFO and FIFO scratch containers used as traversal bookkeeping.
//!
//! The iterative traversals in [`tree`](crate::tree) keep their pending
//! nodes in these containers instead of on the call stack. They know
//! nothing about trees; any general-purpose deque would do, and indeed
//! [`Queue`] is a thin shell over [`VecDeque`].
//!
//! Removal from an empty container fails with
//! [`Error::EmptyContainer`](crate::Error::EmptyContainer) rather than
//! panicking, which lets traversal loops terminate with
//! `while let Ok(node) = stack.pop()`.

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A last-in-first-out container.
///
/// # Examples
///
/// ```
/// use bstree::scratch::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the item `pop` would return, without
    /// removing it. `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// The number of items currently on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item from the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// A first-in-first-out container.
///
/// # Examples
///
/// ```
/// use bstree::scratch::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Places `item` at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item that has waited longest.
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the item `dequeue` would return, without
    /// removing it. `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// The number of items currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item from the queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for x in [1, 2, 3] {
            stack.push(x);
        }

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for x in [1, 2, 3] {
            queue.enqueue(x);
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(7);

        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1);

        let mut queue = Queue::new();
        queue.enqueue(7);

        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn peek_on_empty_is_none() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(stack.peek(), None);

        let queue: Queue<i32> = Queue::new();
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn clear_empties() {
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        for x in 0..4 {
            stack.push(x);
            queue.enqueue(x);
        }

        stack.clear();
        queue.clear();

        assert!(stack.is_empty());
        assert!(queue.is_empty());
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
    }
}
