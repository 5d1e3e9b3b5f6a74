//! An owned, immutable residue sequence.

use std::ops::Range;

use serde::{Deserialize, Serialize, de, ser};

use super::{AminoAcid, NotAnAminoAcid};

/// An owned residue sequence: the input protein as well as every fragment cut
/// from it. Immutable once built; all operations that change content return a
/// new peptide.
///
/// Peptides parse from and display as one letter code text:
/// ```rust
/// use mzdigest::sequence::Peptide;
///
/// let peptide: Peptide = "AKRB".parse().unwrap();
/// assert_eq!(peptide.len(), 4);
/// assert_eq!(peptide.to_string(), "AKRB");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Peptide(Vec<AminoAcid>);

impl Peptide {
    /// Create a peptide from a list of residues
    pub const fn new(residues: Vec<AminoAcid>) -> Self {
        Self(residues)
    }

    /// The residues of this peptide in order
    pub fn residues(&self) -> &[AminoAcid] {
        &self.0
    }

    /// The number of residues
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this peptide contains no residues
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy out a contiguous stretch of this peptide
    ///
    /// # Panics
    /// If the range reaches outside the peptide.
    pub fn subsequence(&self, range: Range<usize>) -> Self {
        Self(self.0[range].to_vec())
    }

    /// Find the first occurrence of `needle` at or after residue index
    /// `start`, scanning towards the C terminus. Repeated calls with
    /// `start = position + 1` enumerate all, possibly overlapping,
    /// occurrences. An empty needle never matches.
    pub fn find_from(&self, needle: &Self, start: usize) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let last = self.len().checked_sub(needle.len())?;
        (start..=last).find(|&offset| self.0[offset..offset + needle.len()] == needle.0[..])
    }
}

impl From<Vec<AminoAcid>> for Peptide {
    fn from(residues: Vec<AminoAcid>) -> Self {
        Self(residues)
    }
}

impl FromIterator<AminoAcid> for Peptide {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for residue in &self.0 {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Peptide {
    type Err = NotAnAminoAcid;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(AminoAcid::try_from).collect()
    }
}

impl Serialize for Peptide {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Peptide {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
