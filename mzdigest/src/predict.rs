//! Ranking of candidate protease sets against experimentally observed
//! peptides.
//!
//! Prediction is exponential in the number of candidates: every non-empty
//! subset of the candidate list is simulated with a full
//! [`DigestionTree`] build of its own. That is the real scaling limit of
//! this module and the reason candidate counts above
//! [`MAX_CANDIDATE_PROTEASES`] are rejected outright. Subset evaluations
//! share no mutable state, so the `rayon` feature can score them in
//! parallel without changing any result.

use std::cmp::Reverse;
use std::collections::HashSet;

use itertools::Itertools;
use ordered_float::OrderedFloat;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DigestionError;
use crate::protease::Protease;
use crate::sequence::Peptide;
use crate::tree::{DigestionParameters, DigestionTree};

/// The maximal number of candidate proteases [`predict`] accepts, bounding
/// the enumeration to 65535 subset simulations.
pub const MAX_CANDIDATE_PROTEASES: usize = 16;

/// The score of one candidate protease subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubsetScore {
    /// The names of the proteases in this subset, in combination order
    pub proteases: Vec<String>,
    /// How many of the observed peptides this subset reproduces
    pub matched: usize,
    /// Coverage of the observed peptides minus the over-prediction penalty.
    /// A subset that reproduces every observed peptide and predicts nothing
    /// else scores 1.0.
    pub score: f64,
}

impl SubsetScore {
    /// The subset names joined into a single display label
    pub fn combined_name(&self) -> String {
        self.proteases.join("+")
    }
}

/// Weights for the prediction score.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionParameters {
    /// The penalty weight for predicted peptides that were never observed
    pub penalty_weight: f64,
    /// The minimal fragment length used in the subset simulations, fragments
    /// must be strictly longer to count
    pub min_peptide_length: usize,
}

impl Default for PredictionParameters {
    fn default() -> Self {
        Self {
            penalty_weight: 0.5,
            min_peptide_length: 3,
        }
    }
}

/// Rank every non-empty subset of `candidates` by how well its simulated
/// digest of `original` explains the `observed` peptides.
///
/// Subsets are enumerated by increasing size, within one size in candidate
/// order. Each subset is simulated as a full digestion tree and its unique
/// peptide set `P` is scored as `matched / observed − penalty_weight ·
/// unmatched / |P|`, with both divisions guarded to 0 for empty
/// denominators. Observed peptides are deduplicated before counting. The
/// result holds one record per subset, sorted by descending score; equal
/// scores keep enumeration order.
///
/// # Errors
/// [`DigestionError::ResourceLimitExceeded`] when more than
/// [`MAX_CANDIDATE_PROTEASES`] candidates are passed in.
///
/// ```rust
/// use mzdigest::predict::{PredictionParameters, predict};
/// use mzdigest::protease::Protease;
/// use mzdigest::sequence::{AminoAcid, Peptide};
///
/// let tryptic = Protease::c_terminal_of(
///     "TrypsinLike",
///     vec![AminoAcid::Lysine, AminoAcid::Arginine],
///     Vec::new(),
/// );
/// let observed: Vec<Peptide> = ["AK", "R", "B"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
///
/// let ranking = predict(
///     &"AKRB".parse().unwrap(),
///     &[tryptic],
///     &observed,
///     &PredictionParameters { min_peptide_length: 0, ..PredictionParameters::default() },
/// )
/// .unwrap();
///
/// assert_eq!(ranking[0].combined_name(), "TrypsinLike");
/// assert_eq!(ranking[0].matched, 3);
/// assert_eq!(ranking[0].score, 1.0);
/// ```
pub fn predict(
    original: &Peptide,
    candidates: &[Protease],
    observed: &[Peptide],
    parameters: &PredictionParameters,
) -> Result<Vec<SubsetScore>, DigestionError> {
    if candidates.len() > MAX_CANDIDATE_PROTEASES {
        return Err(DigestionError::ResourceLimitExceeded {
            candidates: candidates.len(),
            limit: MAX_CANDIDATE_PROTEASES,
        });
    }

    let observed: HashSet<&Peptide> = observed.iter().collect();
    let subsets = (1..=candidates.len())
        .flat_map(|size| candidates.iter().combinations(size))
        .collect_vec();

    #[cfg(feature = "rayon")]
    let evaluations = subsets.par_iter();
    #[cfg(not(feature = "rayon"))]
    let evaluations = subsets.iter();

    let mut scores: Vec<SubsetScore> = evaluations
        .map(|subset| score_subset(original, subset, &observed, parameters))
        .collect();
    scores.sort_by_key(|record| Reverse(OrderedFloat(record.score)));
    Ok(scores)
}

fn score_subset(
    original: &Peptide,
    subset: &[&Protease],
    observed: &HashSet<&Peptide>,
    parameters: &PredictionParameters,
) -> SubsetScore {
    let tree = DigestionTree::build(
        original.clone(),
        subset,
        &DigestionParameters {
            min_peptide_length: parameters.min_peptide_length,
            ..DigestionParameters::default()
        },
    );
    let predicted = tree.unique_peptides();

    let matched = predicted
        .iter()
        .filter(|peptide| observed.contains(*peptide))
        .count();
    let coverage = if observed.is_empty() {
        0.0
    } else {
        matched as f64 / observed.len() as f64
    };
    let penalty = if predicted.is_empty() {
        0.0
    } else {
        parameters.penalty_weight * (predicted.len() - matched) as f64 / predicted.len() as f64
    };

    SubsetScore {
        proteases: subset
            .iter()
            .map(|protease| protease.name.clone())
            .collect(),
        matched,
        score: coverage - penalty,
    }
}

/// The ranking of a single protease from [`screen_single_proteases`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProteaseRanking {
    /// The protease name
    pub protease: String,
    /// How many observed peptides appear in one flat digest of the original
    pub matched: usize,
    /// Matched peptides relative to the number of possible cut sites in the
    /// original sequence, 0 when the protease has no site at all
    pub site_fraction: f64,
}

/// A cheap linear screen next to the exponential [`predict`]: each candidate
/// is applied to the original sequence exactly once, without the repeated
/// digestion of the tree simulation, and matched against the observed
/// peptides (deduplicated). Results are in candidate order; sort by
/// [`ProteaseRanking::site_fraction`] for a ranking.
pub fn screen_single_proteases(
    original: &Peptide,
    candidates: &[Protease],
    observed: &[Peptide],
) -> Vec<ProteaseRanking> {
    let observed: HashSet<&Peptide> = observed.iter().collect();
    candidates
        .iter()
        .map(|protease| {
            let possible_sites = protease.cut_sites(original).len();
            let digest = protease.cleave(original);
            let matched = observed
                .iter()
                .filter(|peptide| digest.contains(*peptide))
                .count();
            ProteaseRanking {
                protease: protease.name.clone(),
                matched,
                site_fraction: if possible_sites == 0 {
                    0.0
                } else {
                    matched as f64 / possible_sites as f64
                },
            }
        })
        .collect_vec()
}
