//! Shape of the seed and Merkle trees.
//!
//! Level widths are obtained by repeatedly halving the leaf count, rounding
//! up, until a single root remains. Nodes are stored level by level from the
//! root down, left to right, so the T leaves occupy the last T slots. Node
//! `j` of level `l` has children `2j` and `2j + 1` on level `l + 1`; the right
//! child is missing when the level below has odd width.
//!
//! The tree-less layout is modelled as a topology without inner nodes: every
//! leaf is its own disclosure unit.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::params::ParameterSet;

/// Deepest tree over any parameter set (T < 1024).
const MAX_LEVELS: usize = 11;

/// Total node count of the tree over `t` leaves.
pub const fn tree_node_count(t: usize) -> usize {
    let mut total = 0;
    let mut width = t;
    loop {
        total += width;
        if width <= 1 {
            break;
        }
        width = width.div_ceil(2);
    }
    total
}

/// Level layout of a tree over `T` leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeShape {
    widths: [usize; MAX_LEVELS],
    offsets: [usize; MAX_LEVELS],
    depth: usize,
}

impl TreeShape {
    /// Shape of the tree over `leaves` leaves.
    pub fn new(leaves: usize) -> Self {
        let mut depth = 1;
        let mut width = leaves;
        while width > 1 {
            width = width.div_ceil(2);
            depth += 1;
        }
        debug_assert!(depth <= MAX_LEVELS);

        let mut widths = [0usize; MAX_LEVELS];
        let mut width = leaves;
        for level in (0..depth).rev() {
            widths[level] = width;
            width = width.div_ceil(2);
        }
        let mut offsets = [0usize; MAX_LEVELS];
        for level in 1..depth {
            offsets[level] = offsets[level - 1] + widths[level - 1];
        }
        Self {
            widths,
            offsets,
            depth,
        }
    }

    /// Number of levels, root included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Node count of `level`.
    pub fn width(&self, level: usize) -> usize {
        self.widths[level]
    }

    /// Storage index of node `j` on `level`.
    #[inline]
    pub fn index(&self, level: usize, j: usize) -> usize {
        self.offsets[level] + j
    }

    /// Storage indices of the children of node `j` on `level`.
    ///
    /// The left child always exists on a non-leaf level.
    #[inline]
    pub fn children(&self, level: usize, j: usize) -> (usize, Option<usize>) {
        let below = level + 1;
        let left = self.index(below, 2 * j);
        let right = (2 * j + 1 < self.widths[below]).then(|| left + 1);
        (left, right)
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.offsets[self.depth - 1] + self.widths[self.depth - 1]
    }

    /// Storage index of the first leaf.
    pub fn leaf_offset(&self) -> usize {
        self.offsets[self.depth - 1]
    }

    /// Minimal set of nodes whose subtrees cover exactly the leaves marked 1.
    ///
    /// A node belongs to the cover when every leaf below it is marked and
    /// its parent does not qualify. Returned in ascending storage order.
    pub fn cover(&self, marked: &[u8]) -> Vec<usize> {
        let mut full = vec![false; self.node_count()];
        let leaf_level = self.depth - 1;
        for (j, &m) in marked.iter().enumerate() {
            full[self.index(leaf_level, j)] = m == 1;
        }
        for level in (0..leaf_level).rev() {
            for j in 0..self.widths[level] {
                let (left, right) = self.children(level, j);
                full[self.index(level, j)] = full[left] && right.map_or(true, |r| full[r]);
            }
        }

        let mut cover = Vec::new();
        for level in 0..self.depth {
            for j in 0..self.widths[level] {
                let node = self.index(level, j);
                let parent_full = level > 0 && full[self.index(level - 1, j / 2)];
                if full[node] && !parent_full {
                    cover.push(node);
                }
            }
        }
        cover
    }
}

/// Commitment layout selected by a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Binary tree with selective subtree disclosure.
    Tree(TreeShape),
    /// Leaves only; each marked leaf is disclosed on its own.
    Flat(usize),
}

impl Topology {
    /// Topology of parameter set `P`.
    pub fn of<P: ParameterSet>() -> Self {
        if P::FLAT {
            Self::Flat(P::T)
        } else {
            Self::Tree(TreeShape::new(P::T))
        }
    }

    /// Nodes held in storage.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Tree(shape) => shape.node_count(),
            Self::Flat(leaves) => *leaves,
        }
    }

    /// Storage index of the first leaf.
    pub fn leaf_offset(&self) -> usize {
        match self {
            Self::Tree(shape) => shape.leaf_offset(),
            Self::Flat(_) => 0,
        }
    }

    /// Storage indices of the disclosed nodes for the marked leaves.
    pub fn cover(&self, marked: &[u8]) -> Vec<usize> {
        match self {
            Self::Tree(shape) => shape.cover(marked),
            Self::Flat(_) => marked
                .iter()
                .enumerate()
                .filter(|&(_, &m)| m == 1)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}
