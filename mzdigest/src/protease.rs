//! Cleavage rules and the built-in protease catalogue.

use std::sync::LazyLock;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::DigestionError;
use crate::sequence::{AminoAcid, Peptide};

/// The side of a matched residue where a protease hydrolyses the peptide
/// bond: C terminal proteases cut immediately after the matched residue,
/// N terminal proteases immediately before it.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Terminus {
    /// The cut occurs after the matched residue
    CTerminal,
    /// The cut occurs before the matched residue
    NTerminal,
}

/// The error that a given character does not name a cleavage terminus, only
/// `'C'` and `'N'` do. This is the one way to hand a rule an invalid
/// position: once a [`Terminus`] exists it is valid by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidTerminus;

impl std::fmt::Display for InvalidTerminus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a valid cleavage terminus, use 'C' or 'N'")
    }
}

impl std::error::Error for InvalidTerminus {}

impl TryFrom<char> for Terminus {
    type Error = InvalidTerminus;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'C' | 'c' => Ok(Self::CTerminal),
            'N' | 'n' => Ok(Self::NTerminal),
            _ => Err(InvalidTerminus),
        }
    }
}

impl std::str::FromStr for Terminus {
    type Err = InvalidTerminus;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        match (characters.next(), characters.next()) {
            (Some(character), None) => Self::try_from(character),
            _ => Err(InvalidTerminus),
        }
    }
}

impl std::fmt::Display for Terminus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::CTerminal => 'C',
                Self::NTerminal => 'N',
            }
        )
    }
}

/// A protease defined by the residues it cuts next to and the residues that
/// block such a cut. A site matches when the residue on the terminus side is
/// one of the `cleavage_residues` and the residue on the opposite side of the
/// bond is not one of the `blocking_residues`. The two sets are expected to
/// be disjoint; an overlapping entry is not rejected but blocking wins.
///
/// A standard set of proteases can be found in [`known_proteases`].
///
/// # Examples
///
/// ## Basic digestion with Trypsin
/// ```rust
/// use mzdigest::protease::known_proteases;
/// use mzdigest::sequence::Peptide;
///
/// let sequence: Peptide = "AKRPGKR".parse().unwrap();
/// let peptides = known_proteases::TRYPSIN.cleave(&sequence);
///
/// assert_eq!(peptides.len(), 3);
/// assert_eq!(peptides[0].to_string(), "AK");
/// assert_eq!(peptides[1].to_string(), "RPGK");
/// assert_eq!(peptides[2].to_string(), "R");
/// ```
///
/// ## Creating a custom protease
/// ```rust
/// use mzdigest::protease::Protease;
/// use mzdigest::sequence::{AminoAcid, Peptide};
///
/// // A protease that cuts after Histidine (H)
/// let his_protease = Protease::c_terminal_of("HisProtease", vec![AminoAcid::Histidine], Vec::new());
///
/// let sequence: Peptide = "AAHFGHKLM".parse().unwrap();
/// let digest = his_protease.cleave(&sequence);
///
/// assert_eq!(digest.len(), 3);
/// assert_eq!(digest[0].to_string(), "AAH");
/// assert_eq!(digest[1].to_string(), "FGH");
/// assert_eq!(digest[2].to_string(), "KLM");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Protease {
    /// The name this protease is reported under
    pub name: String,
    /// The residues next to which this protease cuts
    pub cleavage_residues: Vec<AminoAcid>,
    /// The residues that, adjacent to a cleavage residue across the bond, suppress the cut
    pub blocking_residues: Vec<AminoAcid>,
    /// The side of the matched residue where the cut occurs
    pub terminus: Terminus,
}

impl Protease {
    /// Define a protease
    pub fn new(
        name: impl Into<String>,
        cleavage_residues: Vec<AminoAcid>,
        blocking_residues: Vec<AminoAcid>,
        terminus: Terminus,
    ) -> Self {
        Self {
            name: name.into(),
            cleavage_residues,
            blocking_residues,
            terminus,
        }
    }

    /// Define a protease that cuts on the c terminal side of the provided residues
    pub fn c_terminal_of(
        name: impl Into<String>,
        cleavage_residues: Vec<AminoAcid>,
        blocking_residues: Vec<AminoAcid>,
    ) -> Self {
        Self::new(
            name,
            cleavage_residues,
            blocking_residues,
            Terminus::CTerminal,
        )
    }

    /// Define a protease that cuts on the n terminal side of the provided residues
    pub fn n_terminal_of(
        name: impl Into<String>,
        cleavage_residues: Vec<AminoAcid>,
        blocking_residues: Vec<AminoAcid>,
    ) -> Self {
        Self::new(
            name,
            cleavage_residues,
            blocking_residues,
            Terminus::NTerminal,
        )
    }

    /// Build a protease from plain text parts, the way custom rule
    /// definitions arrive from user input: residue sets as one letter code
    /// strings and the terminus as its single character code.
    ///
    /// # Errors
    /// [`DigestionError::InvalidConfiguration`] when the terminus character
    /// or any residue symbol is not recognised.
    pub fn from_specification(
        name: impl Into<String>,
        cleavage_residues: &str,
        blocking_residues: &str,
        terminus: char,
    ) -> Result<Self, DigestionError> {
        Ok(Self::new(
            name,
            cleavage_residues
                .chars()
                .map(AminoAcid::try_from)
                .collect::<Result<_, _>>()?,
            blocking_residues
                .chars()
                .map(AminoAcid::try_from)
                .collect::<Result<_, _>>()?,
            Terminus::try_from(terminus)?,
        ))
    }

    /// All fragment boundaries this protease produces in the given peptide,
    /// in ascending order. A boundary `b` means the bond between residues
    /// `b - 1` and `b` is hydrolysed, so a cut at the very ends of the
    /// peptide is never reported.
    pub fn cut_sites(&self, peptide: &Peptide) -> Vec<usize> {
        let residues = peptide.residues();
        match self.terminus {
            Terminus::CTerminal => (0..residues.len().saturating_sub(1))
                .filter(|&index| {
                    self.cleavage_residues.contains(&residues[index])
                        && !self.blocking_residues.contains(&residues[index + 1])
                })
                .map(|index| index + 1)
                .collect_vec(),
            Terminus::NTerminal => (1..residues.len())
                .filter(|&index| {
                    self.cleavage_residues.contains(&residues[index])
                        && !self.blocking_residues.contains(&residues[index - 1])
                })
                .collect_vec(),
        }
    }

    /// Cut the given peptide at every matching site. The fragments partition
    /// the input: concatenated back together they reproduce it exactly. When
    /// no site matches the result is a single fragment equal to the input,
    /// meaning no cleavage occurred.
    pub fn cleave(&self, peptide: &Peptide) -> Vec<Peptide> {
        let mut fragments = Vec::new();
        let mut start = 0;
        for site in self.cut_sites(peptide) {
            fragments.push(peptide.subsequence(start..site));
            start = site;
        }
        fragments.push(peptide.subsequence(start..peptide.len()));
        fragments
    }
}

/// The built-in protease catalogue
pub mod known_proteases {
    use super::*;

    /// `Trypsin` cuts after Lysine (K) or Arginine (R), unless followed by Proline (P)
    pub static TRYPSIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Trypsin",
            vec![AminoAcid::Lysine, AminoAcid::Arginine],
            vec![AminoAcid::Proline],
        )
    });

    /// `Chymotrypsin` cuts after Phenylalanine (F), Tyrosine (Y) or Tryptophan (W), unless followed by Proline (P)
    pub static CHYMOTRYPSIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Chymotrypsin",
            vec![
                AminoAcid::Phenylalanine,
                AminoAcid::Tyrosine,
                AminoAcid::Tryptophan,
            ],
            vec![AminoAcid::Proline],
        )
    });

    /// `Pepsin` cuts after Phenylalanine (F) or Leucine (L)
    pub static PEPSIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Pepsin",
            vec![AminoAcid::Phenylalanine, AminoAcid::Leucine],
            Vec::new(),
        )
    });

    /// `Elastase` cuts after Alanine (A), Valine (V) or Leucine (L), unless followed by Proline (P)
    pub static ELASTASE: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Elastase",
            vec![AminoAcid::Alanine, AminoAcid::Valine, AminoAcid::Leucine],
            vec![AminoAcid::Proline],
        )
    });

    /// `Thrombin` cuts after Arginine (R), unless followed by Proline (P)
    pub static THROMBIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Thrombin",
            vec![AminoAcid::Arginine],
            vec![AminoAcid::Proline],
        )
    });

    /// `Plasmepsin` cuts after Phenylalanine (F), Tyrosine (Y), Tryptophan (W), Methionine (M) or Leucine (L)
    pub static PLASMEPSIN: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Plasmepsin",
            vec![
                AminoAcid::Phenylalanine,
                AminoAcid::Tyrosine,
                AminoAcid::Tryptophan,
                AminoAcid::Methionine,
                AminoAcid::Leucine,
            ],
            Vec::new(),
        )
    });

    /// `Falcipain2` cuts after Lysine (K), Arginine (R), Phenylalanine (F) or Leucine (L)
    pub static FALCIPAIN_2: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Falcipain2",
            vec![
                AminoAcid::Lysine,
                AminoAcid::Arginine,
                AminoAcid::Phenylalanine,
                AminoAcid::Leucine,
            ],
            Vec::new(),
        )
    });

    /// `Falcipain3` cuts after Lysine (K), Arginine (R), Phenylalanine (F) or Leucine (L)
    pub static FALCIPAIN_3: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "Falcipain3",
            vec![
                AminoAcid::Lysine,
                AminoAcid::Arginine,
                AminoAcid::Phenylalanine,
                AminoAcid::Leucine,
            ],
            Vec::new(),
        )
    });

    /// `PfSUB1` cuts after Arginine (R), Lysine (K) or Leucine (L)
    pub static PFSUB1: LazyLock<Protease> = LazyLock::new(|| {
        Protease::c_terminal_of(
            "PfSUB1",
            vec![AminoAcid::Arginine, AminoAcid::Lysine, AminoAcid::Leucine],
            Vec::new(),
        )
    });

    /// Every built-in protease in catalogue order
    pub static ALL: LazyLock<[&'static Protease; 9]> = LazyLock::new(|| {
        [
            &TRYPSIN,
            &CHYMOTRYPSIN,
            &PEPSIN,
            &ELASTASE,
            &THROMBIN,
            &PLASMEPSIN,
            &FALCIPAIN_2,
            &FALCIPAIN_3,
            &PFSUB1,
        ]
    });

    /// Look up a built-in protease by name
    pub fn find(name: &str) -> Option<&'static Protease> {
        ALL.iter().find(|protease| protease.name == name).copied()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    struct ProteaseTestCase {
        sequence: Peptide,
        expected_cut_sites: Vec<usize>,
        expected_peptides: Vec<Peptide>,
    }

    /// Generic test function for all proteases
    fn test_protease(protease: &Protease, test_case: &ProteaseTestCase) {
        let cut_sites = protease.cut_sites(&test_case.sequence);

        assert_eq!(
            cut_sites, test_case.expected_cut_sites,
            "Incorrect cut sites: found '{cut_sites:?}' expected '{:?}'",
            test_case.expected_cut_sites
        );

        let peptides = protease.cleave(&test_case.sequence);

        if peptides.len() != test_case.expected_peptides.len() {
            for peptide in &peptides {
                println!("{peptide}");
            }
            panic!("Incorrect number of peptides")
        }

        for (i, peptide) in peptides.iter().enumerate() {
            assert_eq!(
                peptide, &test_case.expected_peptides[i],
                "Peptides don't match: found '{peptide}' expected '{}'",
                test_case.expected_peptides[i]
            );
        }
    }

    fn peptide(text: &str) -> Peptide {
        text.parse().unwrap()
    }

    #[test]
    fn trypsin() {
        let test_cases = vec![
            ProteaseTestCase {
                sequence: peptide("AKRPGKR"),
                expected_cut_sites: vec![2, 6],
                expected_peptides: vec![peptide("AK"), peptide("RPGK"), peptide("R")],
            },
            // a lysine right before a proline is blocked, an arginine at the
            // very end offers no bond to cut
            ProteaseTestCase {
                sequence: peptide("ABKPCDR"),
                expected_cut_sites: Vec::new(),
                expected_peptides: vec![peptide("ABKPCDR")],
            },
        ];

        for test_case in test_cases {
            test_protease(&known_proteases::TRYPSIN, &test_case);
        }
    }

    #[test]
    fn unblocked_tryptic_rule() {
        let rule = Protease::c_terminal_of(
            "TrypsinLike",
            vec![AminoAcid::Lysine, AminoAcid::Arginine],
            Vec::new(),
        );
        test_protease(
            &rule,
            &ProteaseTestCase {
                sequence: peptide("AKRB"),
                expected_cut_sites: vec![2, 3],
                expected_peptides: vec![peptide("AK"), peptide("R"), peptide("B")],
            },
        );
    }

    #[test]
    fn n_terminal_rule() {
        let rule = Protease::n_terminal_of(
            "AspN",
            vec![AminoAcid::AsparticAcid],
            vec![AminoAcid::Glycine],
        );
        let test_cases = vec![
            ProteaseTestCase {
                sequence: peptide("ADGD"),
                expected_cut_sites: vec![1],
                expected_peptides: vec![peptide("A"), peptide("DGD")],
            },
            // a leading aspartic acid has no preceding bond to cut
            ProteaseTestCase {
                sequence: peptide("DAD"),
                expected_cut_sites: vec![2],
                expected_peptides: vec![peptide("DA"), peptide("D")],
            },
        ];

        for test_case in test_cases {
            test_protease(&rule, &test_case);
        }
    }

    #[test]
    fn no_matching_residue_returns_the_input() {
        let sequence = peptide("GGGGG");
        for protease in *known_proteases::ALL {
            assert_eq!(protease.cleave(&sequence), vec![sequence.clone()]);
        }
    }

    #[test]
    fn fragments_partition_the_sequence() {
        let sequence = peptide("MVHLTPEEKSAVTALWGKVNVDEVGGEALGR");
        for protease in *known_proteases::ALL {
            let fragments = protease.cleave(&sequence);
            let total: usize = fragments.iter().map(Peptide::len).sum();
            assert_eq!(total, sequence.len(), "{} lost residues", protease.name);
            let reassembled: Peptide = fragments
                .iter()
                .flat_map(|fragment| fragment.residues().iter().copied())
                .collect();
            assert_eq!(reassembled, sequence, "{} reordered residues", protease.name);
        }
    }

    #[test]
    fn empty_sequence_yields_one_empty_fragment() {
        let fragments = known_proteases::TRYPSIN.cleave(&Peptide::default());
        assert_eq!(fragments, vec![Peptide::default()]);
    }

    #[test]
    fn terminus_parsing() {
        assert_eq!(Terminus::try_from('C'), Ok(Terminus::CTerminal));
        assert_eq!("N".parse::<Terminus>(), Ok(Terminus::NTerminal));
        assert_eq!(Terminus::try_from('Q'), Err(InvalidTerminus));
        assert_eq!("CN".parse::<Terminus>(), Err(InvalidTerminus));
    }

    #[test]
    fn catalogue_lookup() {
        assert_eq!(
            known_proteases::find("Trypsin"),
            Some(&*known_proteases::TRYPSIN)
        );
        assert_eq!(known_proteases::find("PfSUB1"), Some(&*known_proteases::PFSUB1));
        assert_eq!(known_proteases::find("Subtilisin"), None);
    }

    #[test]
    fn specification_parsing() {
        let rule = Protease::from_specification("Custom", "KR", "P", 'C').unwrap();
        assert_eq!(
            rule,
            Protease::c_terminal_of(
                "Custom",
                vec![AminoAcid::Lysine, AminoAcid::Arginine],
                vec![AminoAcid::Proline],
            )
        );

        assert!(matches!(
            Protease::from_specification("Bad", "KR", "", 'Q'),
            Err(DigestionError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Protease::from_specification("Bad", "K1", "", 'C'),
            Err(DigestionError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn serialise_round_trip() {
        let json = serde_json::to_string(&*known_proteases::TRYPSIN).unwrap();
        let back: Protease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *known_proteases::TRYPSIN);
    }
}
