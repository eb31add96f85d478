//! Height bookkeeping and rotations. See [the Wikipedia page][wiki] for terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use tracing::trace;

use crate::node::NodeId;
use crate::tree::Tree;

impl<T, C> Tree<T, C> {
    /// Height of a subtree, `-1` when there is no subtree.
    pub(crate) fn height_of(&self, node: Option<NodeId>) -> i32 {
        node.and_then(|id| self.nodes.get(id))
            .map_or(-1, |n| n.height)
    }

    /// `height(left) - height(right)`: positive when left heavy, negative when right heavy.
    pub(crate) fn balance_factor(&self, id: NodeId) -> i32 {
        let node = &self.nodes[id];
        self.height_of(node.left) - self.height_of(node.right)
    }

    /// Adjusts the height of `id` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let height = self.height_of(node.left).max(self.height_of(node.right)) + 1;
        self.nodes[id].height = height;
    }

    /// Fixes the height of `from` and of every ancestor above it.
    pub(crate) fn fix_all_heights(&mut self, from: Option<NodeId>) {
        let mut cursor = self.nodes.live(from);
        while let Some(id) = cursor {
            self.fix_height(id);
            cursor = self.nodes[id].parent;
        }
    }

    /// Rotate `id` to the left. This moves the right child up vertically and `id` down
    /// vertically. Returns the new root of the subtree, which is `id` itself if there is no right
    /// child to rotate up.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///    old_root                 new_root
    ///    /     \                  /     \
    ///   x    new_root  rotate -> old_root  z
    ///         / \                /  \
    ///        y   z              x    y
    /// ```
    pub(crate) fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(new_root) = self.nodes[id].right else {
            return id;
        };
        let parent = self.nodes[id].parent;
        let inner = self.nodes[new_root].left;

        self.nodes[id].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }
        self.nodes[new_root].left = Some(id);
        self.nodes[id].parent = Some(new_root);
        self.nodes[new_root].parent = parent;
        self.replace_child(parent, id, Some(new_root));

        // The old root is now below the new root so it has to be fixed first.
        self.fix_height(id);
        self.fix_height(new_root);
        trace!(node = %id, new_root = %new_root, "rotated left");
        new_root
    }

    /// Rotate `id` to the right. This moves the left child up vertically and `id` down
    /// vertically. Returns the new root of the subtree, which is `id` itself if there is no left
    /// child to rotate up.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///    old_root                 new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    pub(crate) fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(new_root) = self.nodes[id].left else {
            return id;
        };
        let parent = self.nodes[id].parent;
        let inner = self.nodes[new_root].right;

        self.nodes[id].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }
        self.nodes[new_root].right = Some(id);
        self.nodes[id].parent = Some(new_root);
        self.nodes[new_root].parent = parent;
        self.replace_child(parent, id, Some(new_root));

        self.fix_height(id);
        self.fix_height(new_root);
        trace!(node = %id, new_root = %new_root, "rotated right");
        new_root
    }

    /// Restores the AVL property at `id`, assuming both of its subtrees already have it and the
    /// stored heights are current. Returns the new root of the subtree.
    pub(crate) fn rebalance(&mut self, id: NodeId) -> NodeId {
        let balance = self.balance_factor(id);
        let subtree = if balance < -1 {
            if let Some(right) = self.nodes[id].right {
                // right-left case
                if self.balance_factor(right) > 0 {
                    self.rotate_right(right);
                }
            }
            self.rotate_left(id)
        } else if balance > 1 {
            if let Some(left) = self.nodes[id].left {
                // left-right case
                if self.balance_factor(left) < 0 {
                    self.rotate_left(left);
                }
            }
            self.rotate_right(id)
        } else {
            id
        };

        if cfg!(debug_assertions) {
            let node = &self.nodes[subtree];
            let left_height = self.height_of(node.left);
            let right_height = self.height_of(node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        subtree
    }

    /// Rebalances `from` and then every ancestor up to the root. A stale or missing `from` does
    /// nothing.
    pub(crate) fn rebalance_upward(&mut self, from: Option<NodeId>) {
        let mut cursor = self.nodes.live(from);
        while let Some(id) = cursor {
            // Rotations below can shorten this subtree.
            self.fix_height(id);
            let subtree = self.rebalance(id);
            cursor = self.nodes[subtree].parent;
        }
    }
}
