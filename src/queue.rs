//! Using the tree as a priority queue. The lowest value (by the tree's comparator) has the highest
//! priority; build the tree with [`Reverse`][crate::Reverse] to get a max-queue instead.
//!
//! # Examples
//!
//! ```
//! use avl::{NaturalOrder, Reverse, Tree};
//!
//! let mut queue = Tree::new();
//! queue.push(3);
//! queue.push(1);
//! queue.push(2);
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop_max(), Some(3));
//!
//! let mut max_queue = Tree::with_comparator(Reverse(NaturalOrder));
//! max_queue.extend([3, 1, 2]);
//! assert_eq!(max_queue.into_sorted_vec(), vec![3, 2, 1]);
//! ```

use crate::compare::Comparator;
use crate::tree::Tree;

impl<T, C> Tree<T, C> {
    /// Adds `value` to the queue. Same as [`Tree::insert`].
    pub fn push(&mut self, value: T)
    where
        C: Comparator<T>,
    {
        self.insert(value);
    }

    /// The value that [`pop`][Tree::pop] would return.
    pub fn peek(&self) -> Option<&T> {
        self.first().and_then(|id| self.value(id))
    }

    /// Removes and returns the lowest value.
    pub fn pop(&mut self) -> Option<T> {
        let first = self.first()?;
        self.remove(first)
    }

    /// The highest value.
    pub fn peek_max(&self) -> Option<&T> {
        self.last().and_then(|id| self.value(id))
    }

    /// Removes and returns the highest value.
    pub fn pop_max(&mut self) -> Option<T> {
        let last = self.last()?;
        self.remove(last)
    }

    /// Drains the queue lowest value first. This is a tree sort.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}
