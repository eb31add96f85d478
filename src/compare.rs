//! Orderings a [`Tree`][crate::Tree] can be built with.
//!
//! A tree never calls `Ord` directly. Instead it asks its [`Comparator`] two
//! questions: "is `a` lesser than `b`?" and "is `a` equal to `b`?". The
//! comparator is fixed when the tree is built so the ordering can't change under
//! a non-empty tree.
//!
//! # Examples
//!
//! ```
//! use avl::{FnComparator, Tree};
//!
//! // Order names by length, then alphabetically.
//! let by_length = FnComparator::new(
//!     |a: &&str, b: &&str| (a.len(), a) < (b.len(), b),
//!     |a: &&str, b: &&str| a == b,
//! );
//! let mut tree = Tree::with_comparator(by_length);
//! for name in ["kenny", "kyle", "eric", "stan"] {
//!     tree.insert(name);
//! }
//!
//! let names: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(names, vec!["eric", "kyle", "stan", "kenny"]);
//! ```

use std::fmt;

/// The pair of predicates a tree orders its values by.
///
/// `lesser` must be a strict weak order and `equals` must agree with it: if
/// `equals(a, b)` then neither `lesser(a, b)` nor `lesser(b, a)`. A comparator that
/// breaks this leaves the tree in an unspecified (but memory safe) state which
/// [`Tree::check_invariants`][crate::Tree::check_invariants] can detect.
pub trait Comparator<T> {
    /// Returns `true` if `a` sorts strictly before `b`.
    fn lesser(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` and `b` are the same key.
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Orders values by their [`Ord`] implementation. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn lesser(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A comparator built from two closures.
#[derive(Clone, Copy)]
pub struct FnComparator<L, E> {
    lesser: L,
    equals: E,
}

impl<L, E> FnComparator<L, E> {
    /// Wraps a strict less-than predicate and an equality predicate.
    pub fn new(lesser: L, equals: E) -> Self {
        Self { lesser, equals }
    }
}

impl<L, E> fmt::Debug for FnComparator<L, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T, L, E> Comparator<T> for FnComparator<L, E>
where
    L: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    fn lesser(&self, a: &T, b: &T) -> bool {
        (self.lesser)(a, b)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }
}

/// Flips the ordering of another comparator. A tree built with
/// `Reverse(NaturalOrder)` iterates from largest to smallest and its
/// [`pop`][crate::Tree::pop] behaves like a max-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reverse<C> {
    fn lesser(&self, a: &T, b: &T) -> bool {
        self.0.lesser(b, a)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        self.0.equals(a, b)
    }
}
