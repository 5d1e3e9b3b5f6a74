//! The errors the crate can produce. All operations are pure functions over
//! in-memory data, so the only failure sources are malformed rule
//! configuration and combinatorially explosive prediction requests.

use thiserror::Error;

use crate::protease::InvalidTerminus;
use crate::sequence::NotAnAminoAcid;

/// An error raised while configuring or running a digestion.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DigestionError {
    /// A cleavage rule was built from input that does not describe a valid
    /// rule, an unknown terminus code or residue symbol.
    #[error("invalid cleavage rule configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },
    /// Subset prediction was asked to enumerate more candidate proteases than
    /// the crate supports. Every added candidate doubles the number of full
    /// tree simulations, so this fails fast instead of running unbounded.
    #[error(
        "{candidates} candidate proteases exceed the supported limit of {limit} for subset prediction"
    )]
    ResourceLimitExceeded {
        /// The number of candidate proteases that was passed in.
        candidates: usize,
        /// The maximal number of candidates supported.
        limit: usize,
    },
}

impl From<InvalidTerminus> for DigestionError {
    fn from(error: InvalidTerminus) -> Self {
        Self::InvalidConfiguration {
            reason: error.to_string(),
        }
    }
}

impl From<NotAnAminoAcid> for DigestionError {
    fn from(error: NotAnAminoAcid) -> Self {
        Self::InvalidConfiguration {
            reason: error.to_string(),
        }
    }
}
