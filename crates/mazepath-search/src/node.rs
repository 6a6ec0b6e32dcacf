//! Parent-linked search nodes stored in an index arena.

use std::cmp::Ordering;

use mazepath_core::Coord;

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in arena order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Evaluation score of a node: real-valued for A*, integer for IDA*.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Score {
    Continuous(f64),
    Discrete(i32),
}

impl Score {
    /// The score widened to `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Continuous(v) => v,
            Self::Discrete(v) => f64::from(v),
        }
    }

    /// Total order on the widened value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

/// One grid cell reached during exploration.
///
/// Nodes are never mutated once pushed; a better route to the same cell
/// produces a new node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub coord: Coord,
    pub parent: Option<NodeId>,
    pub evaluation: Score,
    /// Steps taken from the root.
    pub cost: i32,
}

impl SearchNode {
    /// A parentless node with zero cost.
    pub fn root(coord: Coord, evaluation: Score) -> Self {
        Self {
            coord,
            parent: None,
            evaluation,
            cost: 0,
        }
    }

    /// A node one step further than `parent`.
    pub fn child(parent: NodeId, parent_cost: i32, coord: Coord, evaluation: Score) -> Self {
        Self {
            coord,
            parent: Some(parent),
            evaluation,
            cost: parent_cost + 1,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only node storage; handles stay valid until [`clear`](Self::clear).
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Walk from `id` to the root, yielding `id` first.
    pub(crate) fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator produced by [`NodeArena::ancestors`].
pub(crate) struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id);
        self.next = node.parent;
        Some(node)
    }
}
