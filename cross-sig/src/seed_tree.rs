//! Seed tree: derives the T round seeds from one root seed and discloses
//! a chosen subset of them compactly.
//!
//! In tree mode the two children of storage node `n` are the halves of
//! `XOF(seed_n || salt || BE16(n))`. In flat mode each round seed is
//! `XOF(root || salt || BE16(i))` and disclosure lists the round seeds one by
//! one.

use core::marker::PhantomData;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::hash::Xof;
use crate::params::ParameterSet;
use crate::tree::Topology;

/// All seeds of a tree (or the T round seeds in flat mode).
pub struct SeedTree<P: ParameterSet> {
    nodes: Zeroizing<Vec<u8>>,
    topology: Topology,
    _params: PhantomData<P>,
}

impl<P: ParameterSet> SeedTree<P> {
    fn empty() -> Self {
        let topology = Topology::of::<P>();
        Self {
            nodes: Zeroizing::new(vec![0u8; topology.node_count() * P::SEED_BYTES]),
            topology,
            _params: PhantomData,
        }
    }

    #[inline]
    fn node(&self, index: usize) -> &[u8] {
        &self.nodes[index * P::SEED_BYTES..(index + 1) * P::SEED_BYTES]
    }

    /// Derive every seed from `root` and `salt`.
    pub fn generate(root: &[u8], salt: &[u8]) -> Self {
        let mut tree = Self::empty();
        match tree.topology {
            Topology::Tree(shape) => {
                tree.nodes[..P::SEED_BYTES].copy_from_slice(root);
                tree.expand_down(&mut vec![true; shape.node_count()], salt);
            }
            Topology::Flat(leaves) => {
                for i in 0..leaves {
                    let mut xof =
                        Xof::<P::Xof>::absorb(&[root, salt, &(i as u16).to_be_bytes()]);
                    xof.squeeze(&mut tree.nodes[i * P::SEED_BYTES..(i + 1) * P::SEED_BYTES]);
                }
            }
        }
        tree
    }

    /// Expand every known non-leaf node into its children, top-down.
    fn expand_down(&mut self, known: &mut [bool], salt: &[u8]) {
        let Topology::Tree(shape) = self.topology else {
            return;
        };
        let seed = P::SEED_BYTES;
        let mut pair = Zeroizing::new(vec![0u8; 2 * seed]);
        for level in 0..shape.depth() - 1 {
            for j in 0..shape.width(level) {
                let parent = shape.index(level, j);
                if !known[parent] {
                    continue;
                }
                let mut xof = Xof::<P::Xof>::absorb(&[
                    self.node(parent),
                    salt,
                    &(parent as u16).to_be_bytes(),
                ]);
                xof.squeeze(&mut pair);

                let (left, right) = shape.children(level, j);
                self.nodes[left * seed..(left + 1) * seed].copy_from_slice(&pair[..seed]);
                known[left] = true;
                if let Some(right) = right {
                    self.nodes[right * seed..(right + 1) * seed].copy_from_slice(&pair[seed..]);
                    known[right] = true;
                }
            }
        }
    }

    /// Seed of round `i`.
    pub fn round_seed(&self, i: usize) -> &[u8] {
        self.node(self.topology.leaf_offset() + i)
    }

    /// Write the disclosure for the marked rounds into `out`.
    ///
    /// `out` holds `MAX_DISCLOSED` seeds; slots past the cover stay zero.
    pub fn disclose(&self, marked: &[u8], out: &mut [u8]) {
        out.fill(0);
        let cover = self.topology.cover(marked);
        for (slot, &node) in out.chunks_exact_mut(P::SEED_BYTES).zip(&cover) {
            slot.copy_from_slice(self.node(node));
        }
    }

    /// Rebuild the seeds of the marked rounds from a disclosure.
    ///
    /// The returned flag is false when the cover does not fit the
    /// disclosure field or a padding slot is non-zero. Seeds of unmarked
    /// rounds are left zero.
    pub fn regenerate(marked: &[u8], disclosed: &[u8], salt: &[u8]) -> (Self, Choice) {
        let mut tree = Self::empty();
        let seed = P::SEED_BYTES;
        let cover = tree.topology.cover(marked);
        if cover.len() > P::MAX_DISCLOSED {
            return (tree, Choice::from(0));
        }

        let mut known = vec![false; tree.topology.node_count()];
        for (slot, &node) in disclosed.chunks_exact(seed).zip(&cover) {
            tree.nodes[node * seed..(node + 1) * seed].copy_from_slice(slot);
            known[node] = true;
        }
        let padding_ok = disclosed[cover.len() * seed..]
            .iter()
            .fold(Choice::from(1), |acc, b| acc & b.ct_eq(&0));

        tree.expand_down(&mut known, salt);
        (tree, padding_ok)
    }
}
