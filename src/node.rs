//! Node storage. Nodes live in an arena and refer to each other by [`NodeId`] so that a child
//! can point back at its parent without an ownership cycle.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A handle to a node of a [`Tree`][crate::Tree].
///
/// Handles are returned by [`insert`][crate::Tree::insert], [`search`][crate::Tree::search], and
/// friends and stay valid while the node stays in the tree, even across rotations. Once the node
/// is removed the handle goes stale and every operation treats it like an empty subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Back link used to walk upwards. Never used to decide what to free.
    pub(crate) parent: Option<NodeId>,
    /// Longest path to a leaf below this node. A leaf has height 0, an empty subtree -1.
    pub(crate) height: i32,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
            height: 0,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    // Vacant slots form a linked list of free indices.
    Vacant { generation: u32, next_free: Option<usize> },
}

/// A slab of nodes with a free list, so removing a node doesn't shift any other node's index.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores a new leaf and returns its handle.
    pub(crate) fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(value, parent);
        self.len += 1;

        match self.free_head {
            Some(index) => {
                let (generation, next_free) = match &self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => (*generation, *next_free),
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.free_head = next_free;
                self.slots[index] = Slot::Occupied { generation, node };
                NodeId { index, generation }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Releases the slot behind `id` and hands back its node. Returns `None` for a stale handle.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<Node<T>> {
        self.get(id)?;

        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free_head = Some(id.index);
                self.len -= 1;
                Some(node)
            }
            Slot::Vacant { .. } => unreachable!("checked occupied above"),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Returns `Some(id)` if `id` refers to a live node.
    pub(crate) fn live(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| self.get(id).is_some())
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id)
            .unwrap_or_else(|| panic!("node {id} is not in the tree"))
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("node {id} is not in the tree"))
    }
}
