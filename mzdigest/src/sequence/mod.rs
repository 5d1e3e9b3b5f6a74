//! All things related to sequences: the residue alphabet and owned peptides.

mod aminoacid;
mod peptide;

pub use aminoacid::{AminoAcid, NotAnAminoAcid};
pub use peptide::Peptide;
