//! The tree handle and its ordered operations.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::init(10);
//! for value in [5, 15, 3, 7, 12, 20] {
//!     tree.insert(value);
//! }
//!
//! // Nodes are looked up by value and handed back as `NodeId`s.
//! let ten = tree.search(&10).unwrap();
//! assert_eq!(tree.value(ten), Some(&10));
//! assert_eq!(tree.next(ten).and_then(|n| tree.value(n)), Some(&12));
//! assert_eq!(tree.previous(ten).and_then(|n| tree.value(n)), Some(&7));
//!
//! // Removing a node hands back its value and leaves the handle stale.
//! assert_eq!(tree.remove(ten), Some(10));
//! assert_eq!(tree.value(ten), None);
//! assert_eq!(tree.search(&10), None);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 5, 7, 12, 15, 20]);
//! ```

use std::fmt;

use tracing::trace;

use crate::compare::{Comparator, NaturalOrder};
use crate::error::TreeError;
use crate::iter::{InOrder, InOrderRecursive};
use crate::node::{Arena, NodeId};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) ordered by a [`Comparator`].
///
/// Equal values are allowed. A new value that ties with an existing one is inserted to its right,
/// so values that compare equal come out of an in-order walk in insertion order (until
/// rebalancing moves them around).
#[derive(Clone)]
pub struct Tree<T, C = NaturalOrder> {
    pub(crate) nodes: Arena<T>,
    pub(crate) root: Option<NodeId>,
    pub(crate) comparator: C,
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> Tree<T, NaturalOrder> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Generates a `Tree` ordered by `T`'s [`Ord`] implementation holding `value`.
    pub fn init(value: T) -> Self
    where
        T: Ord,
    {
        Self::init_with(value, NaturalOrder)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Generates a `Tree` ordered by `comparator` holding `value`. The comparator is installed
    /// before the value is inserted.
    pub fn init_with(value: T, comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        let mut tree = Self::with_comparator(comparator);
        tree.insert(value);
        tree
    }

    /// The comparator this tree is ordered by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value. All outstanding [`NodeId`]s go stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// The value stored at `node`, or `None` if the handle is stale.
    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// The parent of `node`. `None` for the root or a stale handle.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// The left child of `node`.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.left)
    }

    /// The right child of `node`.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.right)
    }

    /// Height of the subtree rooted at `node`, `-1` for a stale handle.
    pub fn node_height(&self, node: NodeId) -> i32 {
        self.height_of(Some(node))
    }

    /// Inserts `value`, rebalancing on the way back up, and returns the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value);
    /// }
    ///
    /// // Sorted input would make a plain BST a linked list.
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId
    where
        C: Comparator<T>,
    {
        let mut parent = None;
        let mut goes_left = false;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            parent = Some(id);
            let node = &self.nodes[id];
            goes_left = self.comparator.lesser(&value, &node.value);
            cursor = if goes_left { node.left } else { node.right };
        }

        let inserted = self.nodes.alloc(value, parent);
        match parent {
            None => self.root = Some(inserted),
            Some(parent) if goes_left => self.nodes[parent].left = Some(inserted),
            Some(parent) => self.nodes[parent].right = Some(inserted),
        }
        trace!(node = %inserted, len = self.len(), "inserted");

        self.fix_all_heights(parent);
        // A single rotation is enough after an insert but every ancestor gets looked at anyway.
        self.rebalance_upward(Some(inserted));
        inserted
    }

    /// Finds a node holding a value equal to `key`, starting at the root.
    pub fn search(&self, key: &T) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        self.search_from(key, None)
    }

    /// Finds a node holding a value equal to `key` in the subtree rooted at `from` (the root when
    /// `from` is `None`). A stale `from` finds nothing.
    pub fn search_from(&self, key: &T, from: Option<NodeId>) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        let mut cursor = match from {
            Some(from) => self.nodes.live(Some(from)),
            None => self.root,
        };
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if self.comparator.equals(&node.value, key) {
                return Some(id);
            }
            cursor = if self.comparator.lesser(key, &node.value) {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// Returns `true` if some value in the tree equals `key`.
    pub fn contains(&self, key: &T) -> bool
    where
        C: Comparator<T>,
    {
        self.search(key).is_some()
    }

    /// Deletes one node holding a value equal to `key` and returns its value. If the tree does
    /// not contain `key`, nothing happens.
    pub fn delete(&mut self, key: &T) -> Option<T>
    where
        C: Comparator<T>,
    {
        let node = self.search(key)?;
        self.remove(node)
    }

    /// Removes `node` from the tree and returns its value. A stale handle is a no-op.
    ///
    /// A node with two children is replaced by its in-order successor node (not just the
    /// successor's value), so handles to every other node stay valid.
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        let target = self.nodes.live(Some(node))?;
        let (left, right, parent) = {
            let n = &self.nodes[target];
            (n.left, n.right, n.parent)
        };

        // Where heights first changed. Everything from here up gets fixed and rebalanced.
        let changed_from = match (left, right) {
            (None, _) => {
                self.transplant(target, right);
                parent
            }
            (Some(_), None) => {
                self.transplant(target, left);
                parent
            }
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                let mut changed_from = Some(successor);

                if self.nodes[successor].parent != Some(target) {
                    changed_from = self.nodes[successor].parent;
                    let successor_right = self.nodes[successor].right;
                    self.transplant(successor, successor_right);
                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                }

                self.transplant(target, Some(successor));
                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
                changed_from
            }
        };
        trace!(node = %target, rebalance_from = ?changed_from, "removing");

        self.fix_all_heights(changed_from);
        self.rebalance_upward(changed_from);
        self.nodes.free(target).map(|n| n.value)
    }

    /// Points `u`'s parent at `v` instead of `u` (or makes `v` the root) and points `v` back at
    /// that parent. Children of `u` and `v` are left alone.
    pub(crate) fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes[u].parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Swaps whichever child link of `parent` points at `old` for `new`. A `None` parent means
    /// `old` is the root.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else if parent.right == Some(old) {
                    parent.right = new;
                }
            }
        }
    }

    /// The node with the lowest value in the subtree rooted at `from`.
    pub fn minimum(&self, from: Option<NodeId>) -> Option<NodeId> {
        self.nodes.live(from).map(|id| self.leftmost(id))
    }

    /// The node with the highest value in the subtree rooted at `from`.
    pub fn maximum(&self, from: Option<NodeId>) -> Option<NodeId> {
        self.nodes.live(from).map(|id| self.rightmost(id))
    }

    /// The node with the lowest value in the tree.
    pub fn first(&self) -> Option<NodeId> {
        self.minimum(self.root)
    }

    /// The node with the highest value in the tree.
    pub fn last(&self) -> Option<NodeId> {
        self.maximum(self.root)
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    /// The in-order successor of `node`: `None` if `node` holds the maximum.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.live(Some(node))?;
        if let Some(right) = self.nodes[current].right {
            return Some(self.leftmost(right));
        }

        let mut parent = self.nodes[current].parent;
        while let Some(p) = parent {
            if self.nodes[p].right != Some(current) {
                break;
            }
            current = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    /// The in-order predecessor of `node`: `None` if `node` holds the minimum.
    pub fn previous(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.live(Some(node))?;
        if let Some(left) = self.nodes[current].left {
            return Some(self.rightmost(left));
        }

        let mut parent = self.nodes[current].parent;
        while let Some(p) = parent {
            if self.nodes[p].left != Some(current) {
                break;
            }
            current = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    /// Iterates the whole tree in order.
    pub fn iter(&self) -> InOrder<'_, T, C> {
        InOrder::new(self, self.root)
    }

    /// Iterates the subtree rooted at `from` in order by following parent links. `None` means
    /// the whole tree.
    pub fn in_order(&self, from: Option<NodeId>) -> InOrder<'_, T, C> {
        let from = match from {
            Some(from) => self.nodes.live(Some(from)),
            None => self.root,
        };
        InOrder::new(self, from)
    }

    /// Iterates the subtree rooted at `from` in order, left/self/right, keeping the pending
    /// nodes on a stack. `None` means the whole tree.
    pub fn in_order_recursive(&self, from: Option<NodeId>) -> InOrderRecursive<'_, T, C> {
        let from = match from {
            Some(from) => self.nodes.live(Some(from)),
            None => self.root,
        };
        InOrderRecursive::new(self, from)
    }

    /// Walks the whole tree verifying the ordering, balance, height, and parent link invariants.
    ///
    /// This is `O(n)` and only fails if the comparator isn't a strict weak order consistent with
    /// its equality predicate.
    pub fn check_invariants(&self) -> Result<(), TreeError>
    where
        C: Comparator<T>,
    {
        let mut reachable = 0;
        if let Some(root) = self.root {
            self.check_subtree(root, None, None, None, &mut reachable)?;
        }

        if reachable != self.len() {
            return Err(TreeError::LengthMismatch {
                reachable,
                stored: self.len(),
            });
        }
        Ok(())
    }

    /// Checks the subtree at `id` and returns its recomputed height. `lower` and `upper` are the
    /// nearest ancestors this subtree hangs to the right and to the left of.
    fn check_subtree(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        lower: Option<NodeId>,
        upper: Option<NodeId>,
        reachable: &mut usize,
    ) -> Result<i32, TreeError>
    where
        C: Comparator<T>,
    {
        let node = self
            .nodes
            .get(id)
            .ok_or(TreeError::BrokenParentLink { node: id })?;
        *reachable += 1;

        if node.parent != parent {
            return Err(TreeError::BrokenParentLink { node: id });
        }
        if let Some(lower) = lower {
            if self.comparator.lesser(&node.value, &self.nodes[lower].value) {
                return Err(TreeError::Unordered {
                    node: id,
                    ancestor: lower,
                });
            }
        }
        if let Some(upper) = upper {
            if self.comparator.lesser(&self.nodes[upper].value, &node.value) {
                return Err(TreeError::Unordered {
                    node: id,
                    ancestor: upper,
                });
            }
        }

        let left_height = match node.left {
            Some(left) => self.check_subtree(left, Some(id), lower, Some(id), reachable)?,
            None => -1,
        };
        let right_height = match node.right {
            Some(right) => self.check_subtree(right, Some(id), Some(id), upper, reachable)?,
            None => -1,
        };

        let expected = left_height.max(right_height) + 1;
        if node.height != expected {
            return Err(TreeError::HeightMismatch {
                node: id,
                stored: node.height,
                expected,
            });
        }
        let balance = left_height - right_height;
        if balance.abs() > 1 {
            return Err(TreeError::Unbalanced { node: id, balance });
        }
        Ok(expected)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for Tree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
