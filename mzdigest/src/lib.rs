#![doc = include_str!("../README.md")]

pub mod error;
/// Mascot-style CSV export of peptide lists.
pub mod mascot;
/// Protease-set prediction: score every candidate subset against observed peptides.
pub mod predict;
/// Cleavage rules and the built-in protease catalogue.
pub mod protease;
/// Contains all things related to sequences: amino acids and peptides.
pub mod sequence;
/// The peptide tree produced by simulating repeated digestion.
pub mod tree;

mod render;

/// A subset of the types that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::error::DigestionError;
    pub use crate::predict::{
        PredictionParameters, ProteaseRanking, SubsetScore, predict, screen_single_proteases,
    };
    pub use crate::protease::{Protease, Terminus};
    pub use crate::sequence::{AminoAcid, Peptide};
    pub use crate::tree::{DigestionParameters, DigestionTree, PeptideNode};
}
