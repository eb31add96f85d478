//! In-order iterators over a [`Tree`].
//!
//! Both iterators produce the same sequence. [`InOrder`] needs no memory besides two node handles
//! because every node knows its parent. [`InOrderRecursive`] is the left/self/right recursion with
//! its call stack kept in a `Vec`, which never looks at parent links.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let tree: Tree<_> = [5, 2, 9, 7, 1, 3].into_iter().collect();
//!
//! let walked: Vec<_> = tree.iter().collect();
//! let recursed: Vec<_> = tree.in_order_recursive(None).collect();
//! assert_eq!(walked, recursed);
//!
//! // Any subtree can be walked on its own.
//! let nine = tree.search(&9);
//! assert_eq!(tree.in_order(nine).copied().collect::<Vec<_>>(), vec![7, 9]);
//! ```

use std::iter::FusedIterator;

use crate::node::NodeId;
use crate::tree::Tree;

/// Walks a subtree in order by following child and parent links.
///
/// Created by [`Tree::iter`] and [`Tree::in_order`].
pub struct InOrder<'a, T, C> {
    tree: &'a Tree<T, C>,
    /// Root of the walked subtree. Climbing above it ends the walk.
    top: Option<NodeId>,
    current: Option<NodeId>,
    /// The node visited just before `current`, which tells us which way we came in.
    last: Option<NodeId>,
}

impl<'a, T, C> InOrder<'a, T, C> {
    pub(crate) fn new(tree: &'a Tree<T, C>, from: Option<NodeId>) -> Self {
        Self {
            tree,
            top: from,
            current: from,
            last: None,
        }
    }

    fn climb(&mut self, from: NodeId) {
        self.last = Some(from);
        self.current = if Some(from) == self.top {
            None
        } else {
            self.tree.nodes[from].parent
        };
    }
}

impl<'a, T, C> Iterator for InOrder<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let id = self.current?;
            let node = &tree.nodes[id];

            // Back up from the right: this whole subtree is done.
            if self.last.is_some() && self.last == node.right {
                self.climb(id);
                continue;
            }

            // Coming down from above: the left subtree goes first.
            if node.left.is_some() && self.last != node.left {
                self.last = Some(id);
                self.current = node.left;
                continue;
            }

            match node.right {
                Some(right) => {
                    self.last = Some(id);
                    self.current = Some(right);
                }
                None => self.climb(id),
            }
            return Some(&node.value);
        }
    }
}

impl<T, C> FusedIterator for InOrder<'_, T, C> {}

/// Walks a subtree in order, left/self/right, keeping the nodes still waiting to be yielded on a
/// stack instead of the call stack.
///
/// Created by [`Tree::in_order_recursive`].
pub struct InOrderRecursive<'a, T, C> {
    tree: &'a Tree<T, C>,
    pending: Vec<NodeId>,
}

impl<'a, T, C> InOrderRecursive<'a, T, C> {
    pub(crate) fn new(tree: &'a Tree<T, C>, from: Option<NodeId>) -> Self {
        let mut iter = Self {
            tree,
            pending: Vec::with_capacity(tree.height_of(from).max(0) as usize + 1),
        };
        iter.descend(from);
        iter
    }

    /// Equivalent of recursing into the left child until there isn't one.
    fn descend(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.pending.push(id);
            cursor = self.tree.nodes[id].left;
        }
    }
}

impl<'a, T, C> Iterator for InOrderRecursive<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let id = self.pending.pop()?;
        let node = &tree.nodes[id];
        self.descend(node.right);
        Some(&node.value)
    }
}

impl<T, C> FusedIterator for InOrderRecursive<'_, T, C> {}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    #[test]
    fn both_strategies_agree() {
        let tree: Tree<_> = [5, 2, 9, 7, 1, 3, 4, 24, 14, 34, -1, 12, 18, 10, 16]
            .into_iter()
            .collect();
        let walked: Vec<_> = tree.iter().copied().collect();
        let recursed: Vec<_> = tree.in_order_recursive(None).copied().collect();

        assert_eq!(
            walked,
            vec![-1, 1, 2, 3, 4, 5, 7, 9, 10, 12, 14, 16, 18, 24, 34]
        );
        assert_eq!(walked, recursed);
    }

    #[test]
    fn walking_a_subtree_stops_at_its_root() {
        let tree: Tree<_> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
        let five = tree.search(&5);
        let fifteen = tree.search(&15);

        assert_eq!(tree.in_order(five).copied().collect::<Vec<_>>(), vec![3, 5, 7]);
        assert_eq!(
            tree.in_order_recursive(fifteen)
                .copied()
                .collect::<Vec<_>>(),
            vec![12, 15, 20]
        );
    }

    #[test]
    fn leaf_subtree_yields_only_itself() {
        let tree: Tree<_> = [2, 1, 3].into_iter().collect();
        let one = tree.search(&1);
        assert_eq!(tree.in_order(one).collect::<Vec<_>>(), vec![&1]);
        assert_eq!(tree.in_order_recursive(one).collect::<Vec<_>>(), vec![&1]);
    }

    #[test]
    fn duplicates_are_all_yielded() {
        let tree: Tree<_> = [3, 3, 1, 3, 2, 3].into_iter().collect();
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 3, 3, 3]
        );
        assert_eq!(
            tree.in_order_recursive(None).copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 3, 3, 3]
        );
    }

    #[test]
    fn empty_and_stale_start_yield_nothing() {
        let mut tree: Tree<i32> = Tree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.in_order_recursive(None).next(), None);

        let one = tree.insert(1);
        tree.remove(one);
        assert_eq!(tree.in_order(Some(one)).next(), None);
        assert_eq!(tree.in_order_recursive(Some(one)).next(), None);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let tree: Tree<_> = [1, 2].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn for_loop_over_a_reference() {
        let tree: Tree<_> = (1..=4).collect();
        let mut total = 0;
        for value in &tree {
            total += value;
        }
        assert_eq!(total, 10);
    }
}
