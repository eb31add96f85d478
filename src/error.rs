use thiserror::Error;

use crate::node::NodeId;

/// A structural invariant that [`Tree::check_invariants`][crate::Tree::check_invariants] found
/// broken. None of these can happen through the public API with a valid
/// [`Comparator`][crate::Comparator]. Seeing one means the comparator isn't a strict weak order
/// (or isn't consistent with its equality predicate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A value in a left subtree isn't lesser than its ancestor, or an ancestor is greater than a
    /// value in its right subtree.
    #[error("node {node} is out of order with its ancestor {ancestor}")]
    Unordered {
        /// The misplaced node.
        node: NodeId,
        /// The ancestor it was compared against.
        ancestor: NodeId,
    },
    /// The heights of a node's subtrees differ by more than one.
    #[error("node {node} has balance factor {balance}")]
    Unbalanced {
        /// The unbalanced node.
        node: NodeId,
        /// `height(left) - height(right)`.
        balance: i32,
    },
    /// A node's stored height doesn't match the height of its subtrees.
    #[error("node {node} stores height {stored} but its subtrees give {expected}")]
    HeightMismatch {
        /// The node with the stale height.
        node: NodeId,
        /// The height stored on the node.
        stored: i32,
        /// The height recomputed from its children.
        expected: i32,
    },
    /// A child's parent link doesn't point back at the node that owns it (or the root has a
    /// parent).
    #[error("node {node} has a parent link that isn't the inverse of a child link")]
    BrokenParentLink {
        /// The node whose parent link is wrong.
        node: NodeId,
    },
    /// The number of nodes reachable from the root isn't the number of values stored.
    #[error("{reachable} nodes are reachable from the root but the tree holds {stored}")]
    LengthMismatch {
        /// Nodes found by walking from the root.
        reachable: usize,
        /// Values the tree thinks it holds.
        stored: usize,
    },
}
