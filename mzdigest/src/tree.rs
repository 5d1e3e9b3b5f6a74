//! Simulation of repeated digestion as a peptide tree.

use std::borrow::Borrow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::protease::Protease;
use crate::sequence::Peptide;

/// One candidate fragment in a [`DigestionTree`]. The node owns the peptide
/// content and the nodes produced by cleaving it; the parent is whichever
/// node a traversal reached it through.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeptideNode {
    peptide: Peptide,
    children: Vec<PeptideNode>,
}

impl PeptideNode {
    const fn new(peptide: Peptide) -> Self {
        Self {
            peptide,
            children: Vec::new(),
        }
    }

    /// The fragment this node stands for
    pub const fn peptide(&self) -> &Peptide {
        &self.peptide
    }

    /// The fragments produced by cleaving this node's peptide, in protease
    /// order then fragment order
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Bounds for a digestion simulation.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct DigestionParameters {
    /// Fragments must be strictly longer than this to enter the tree
    pub min_peptide_length: usize,
    /// Safety bound on the recursion depth. The global de-duplication of
    /// fragments terminates realistic digests long before this is reached.
    pub max_depth: usize,
}

impl Default for DigestionParameters {
    fn default() -> Self {
        Self {
            min_peptide_length: 3,
            max_depth: 100,
        }
    }
}

/// The tree of every distinct peptide reachable from a root sequence by
/// repeatedly applying a set of proteases. Read-only once built.
///
/// Construction is depth first in protease order. A fragment only becomes a
/// node when it differs from the peptide it was cut from, is strictly longer
/// than [`DigestionParameters::min_peptide_length`], and was not produced
/// anywhere earlier in the build: the same substring reachable through two
/// different cleavage routes appears exactly once. That global
/// de-duplication is what keeps the tree finite and small, the depth bound
/// is only a backstop.
///
/// ```rust
/// use mzdigest::protease::known_proteases;
/// use mzdigest::tree::{DigestionParameters, DigestionTree};
///
/// let rules = vec![known_proteases::TRYPSIN.clone()];
/// let tree = DigestionTree::build(
///     "AKRB".parse().unwrap(),
///     &rules,
///     &DigestionParameters { min_peptide_length: 0, ..DigestionParameters::default() },
/// );
///
/// let unique = tree.unique_peptides();
/// assert_eq!(unique.len(), 3);
/// assert!(unique.contains(&"AK".parse().unwrap()));
/// assert!(unique.contains(&"R".parse().unwrap()));
/// assert!(unique.contains(&"B".parse().unwrap()));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigestionTree {
    root: PeptideNode,
}

impl DigestionTree {
    /// Simulate repeated digestion of `sequence` with the given proteases.
    /// An empty protease list produces a root-only tree. The proteases can
    /// be given as any slice of owned or borrowed rules.
    pub fn build<P: Borrow<Protease>>(
        sequence: Peptide,
        proteases: &[P],
        parameters: &DigestionParameters,
    ) -> Self {
        let mut root = PeptideNode::new(sequence);
        let mut produced = HashSet::new();
        expand(&mut root, proteases, 0, parameters, &mut produced);
        Self { root }
    }

    /// The node holding the undigested input sequence
    pub const fn root(&self) -> &PeptideNode {
        &self.root
    }
}

fn expand<P: Borrow<Protease>>(
    node: &mut PeptideNode,
    proteases: &[P],
    depth: usize,
    parameters: &DigestionParameters,
    produced: &mut HashSet<Peptide>,
) {
    if depth >= parameters.max_depth {
        return;
    }

    for protease in proteases {
        for fragment in protease.borrow().cleave(&node.peptide) {
            if fragment == node.peptide
                || fragment.len() <= parameters.min_peptide_length
                || produced.contains(&fragment)
            {
                continue;
            }
            produced.insert(fragment.clone());
            let mut child = PeptideNode::new(fragment);
            expand(&mut child, proteases, depth + 1, parameters, produced);
            node.children.push(child);
        }
    }
}
