//! Merkle commitment to the per-round `cmt0` digests.
//!
//! Tree mode reuses the seed-tree topology: a node with two children is
//! `H(left || right)` and a node with a single child takes that child's digest
//! unchanged. The batch proof for the marked leaves is the digests of the
//! same cover nodes the seed tree discloses.
//!
//! Flat mode splits the leaves into four consecutive blocks, hashes each
//! block and then the four block digests; its proof is the marked leaves.

use core::marker::PhantomData;

use subtle::{Choice, ConstantTimeEq};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::hash::hash;
use crate::params::ParameterSet;
use crate::tree::{Topology, TreeShape};

/// Merkle tree over T leaf digests.
pub struct MerkleTree<P: ParameterSet> {
    /// Every node in tree mode, the leaves in flat mode.
    nodes: Vec<u8>,
    topology: Topology,
    root: Vec<u8>,
    _params: PhantomData<P>,
}

/// Hash every inner node whose inputs are known, bottom-up.
fn fill_up<P: ParameterSet>(shape: &TreeShape, nodes: &mut [u8], known: &mut [bool]) {
    let d = P::DIGEST_BYTES;
    for level in (0..shape.depth() - 1).rev() {
        for j in 0..shape.width(level) {
            let node = shape.index(level, j);
            if known[node] {
                continue;
            }
            let (left, right) = shape.children(level, j);
            match right {
                Some(right) if known[left] && known[right] => {
                    // siblings are adjacent in storage
                    let mut digest = vec![0u8; d];
                    hash::<P::Xof>(&mut digest, &[&nodes[left * d..(right + 1) * d]]);
                    nodes[node * d..(node + 1) * d].copy_from_slice(&digest);
                    known[node] = true;
                }
                None if known[left] => {
                    nodes.copy_within(left * d..(left + 1) * d, node * d);
                    known[node] = true;
                }
                _ => {}
            }
        }
    }
}

/// Root of the four-block layout.
fn flat_root<P: ParameterSet>(leaves: &[u8], root: &mut [u8]) {
    let d = P::DIGEST_BYTES;
    let t = P::T;
    let mut quad = vec![0u8; 4 * d];
    let mut start = 0;
    for (i, block) in quad.chunks_exact_mut(d).enumerate() {
        let len = t / 4 + usize::from(i < t % 4);
        hash::<P::Xof>(block, &[&leaves[start * d..(start + len) * d]]);
        start += len;
    }
    hash::<P::Xof>(root, &[&quad]);
}

impl<P: ParameterSet> MerkleTree<P> {
    /// Build the tree over `leaves`, `T` digests laid end to end.
    pub fn build(leaves: &[u8]) -> Self {
        let d = P::DIGEST_BYTES;
        debug_assert_eq!(leaves.len(), P::T * d);
        let topology = Topology::of::<P>();
        let mut root = vec![0u8; d];

        let nodes = match topology {
            Topology::Tree(shape) => {
                let mut nodes = vec![0u8; shape.node_count() * d];
                nodes[shape.leaf_offset() * d..].copy_from_slice(leaves);
                let mut known = vec![false; shape.node_count()];
                known[shape.leaf_offset()..].fill(true);
                fill_up::<P>(&shape, &mut nodes, &mut known);
                root.copy_from_slice(&nodes[..d]);
                nodes
            }
            Topology::Flat(_) => {
                flat_root::<P>(leaves, &mut root);
                leaves.to_vec()
            }
        };

        Self {
            nodes,
            topology,
            root,
            _params: PhantomData,
        }
    }

    /// Root digest.
    pub fn root(&self) -> &[u8] {
        &self.root
    }

    /// Write the batch proof for the marked leaves into `out`.
    ///
    /// `out` holds `MAX_DISCLOSED` digests; slots past the proof stay zero.
    pub fn proof(&self, marked: &[u8], out: &mut [u8]) {
        let d = P::DIGEST_BYTES;
        out.fill(0);
        for (slot, &node) in out.chunks_exact_mut(d).zip(&self.topology.cover(marked)) {
            slot.copy_from_slice(&self.nodes[node * d..(node + 1) * d]);
        }
    }
}

/// Recompute the root from the unmarked leaves and a batch proof.
///
/// `leaves` holds T digests of which only the unmarked ones are read.
/// Returns false when the proof does not fit its field, has non-zero
/// padding, or does not let the root be rebuilt.
pub fn recompute_root<P: ParameterSet>(
    root: &mut [u8],
    leaves: &[u8],
    marked: &[u8],
    proof: &[u8],
) -> Choice {
    let d = P::DIGEST_BYTES;
    let topology = Topology::of::<P>();
    let cover = topology.cover(marked);
    if cover.len() > P::MAX_DISCLOSED {
        root.fill(0);
        return Choice::from(0);
    }
    let padding_ok = proof[cover.len() * d..]
        .iter()
        .fold(Choice::from(1), |acc, b| acc & b.ct_eq(&0));

    let mut nodes = vec![0u8; topology.node_count() * d];
    let mut known = vec![false; topology.node_count()];
    let offset = topology.leaf_offset();
    for (i, &m) in marked.iter().enumerate() {
        if m == 0 {
            let node = offset + i;
            nodes[node * d..(node + 1) * d].copy_from_slice(&leaves[i * d..(i + 1) * d]);
            known[node] = true;
        }
    }
    for (slot, &node) in proof.chunks_exact(d).zip(&cover) {
        nodes[node * d..(node + 1) * d].copy_from_slice(slot);
        known[node] = true;
    }

    match topology {
        Topology::Tree(shape) => {
            fill_up::<P>(&shape, &mut nodes, &mut known);
            root.copy_from_slice(&nodes[..d]);
            padding_ok & Choice::from(u8::from(known[0]))
        }
        Topology::Flat(_) => {
            flat_root::<P>(&nodes, root);
            padding_ok & Choice::from(u8::from(known.iter().all(|&k| k)))
        }
    }
}
