//! Nodes of the quaternary coding tree, stored in an arena and referenced by index.

use std::fmt::{Display, Formatter};

use crate::Symbol;

/// Index of a node within its [`Tree`].
pub type NodeId = usize;

/// One of the four output symbols. The discriminant is the child slot it selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nuc {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

impl Nuc {
    /// Child slot order. Slot 0 is "A", slot 3 is "G".
    pub const ALL: [Nuc; 4] = [Nuc::A, Nuc::T, Nuc::C, Nuc::G];

    /// Map an ASCII byte to a nucleotide, or None if it is not one of A, T, C, G.
    pub fn from_byte(byte: u8) -> Option<Nuc> {
        match byte {
            b'A' => Some(Nuc::A),
            b'T' => Some(Nuc::T),
            b'C' => Some(Nuc::C),
            b'G' => Some(Nuc::G),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Nuc::A => b'A',
            Nuc::T => b'T',
            Nuc::C => b'C',
            Nuc::G => b'G',
        }
    }

    /// The child slot this nucleotide selects.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl Display for Nuc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// A leaf carries an optional symbol (None marks a padding leaf). An internal node
/// always has four children and the sum of their frequencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: Option<Symbol>, freq: u64 },
    Internal { freq: u64, kids: [NodeId; 4] },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A quaternary prefix tree with exactly one root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Wrap an arena whose nodes are all reachable from `root`.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Tree { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Follow the child labelled `nuc`, or None if `id` is a leaf.
    pub fn child(&self, id: NodeId, nuc: Nuc) -> Option<NodeId> {
        match &self.nodes[id] {
            Node::Internal { kids, .. } => Some(kids[nuc.slot()]),
            Node::Leaf { .. } => None,
        }
    }

    /// Total number of nodes in the arena, leaves and internal nodes alike.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Iterate over every node in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
