//! This crate exposes a self-balancing Binary Search Tree (an AVL tree) with parent links,
//! usable as a sorted container or as a priority queue.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariant of a BST is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, none of the `Node`s in its right subtree have a
//!    value less than its own value. Equal values are inserted to the right.
//!
//! ## AVL Tree
//!
//! Searching takes `O(height)` so the height has to be kept small. An AVL tree
//! keeps, for every `Node`, the heights of its two subtrees within one of each
//! other. Whenever an insert or delete breaks that, a rotation (or two) on the
//! way back up to the root restores it, which bounds the height to roughly
//! `1.44 * lg N`.
//!
//! Every `Node` also knows its parent. That makes it possible to walk to the
//! in-order successor or predecessor of any `Node`, and to iterate the whole
//! tree in order, without recursion or a stack.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree: Tree<i32> = [5, 2, 9, 7, 1].into_iter().collect();
//! tree.insert(3);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 9]);
//!
//! // Used as a min-priority queue.
//! assert_eq!(tree.peek(), Some(&1));
//! assert_eq!(tree.pop(), Some(1));
//! assert_eq!(tree.pop(), Some(2));
//! ```

#![deny(missing_docs, unsafe_code, clippy::clone_on_ref_ptr)]

mod balance;
pub mod compare;
mod error;
pub mod iter;
mod node;
mod queue;
mod tree;


pub use compare::{Comparator, FnComparator, NaturalOrder, Reverse};
pub use error::TreeError;
pub use iter::{InOrder, InOrderRecursive};
pub use node::NodeId;
pub use tree::Tree;
