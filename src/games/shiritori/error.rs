//! Fatal-class engine errors.
//!
//! These abort the current turn without blaming the player, unlike a
//! [`Rejection`](super::Rejection).

use super::analyzer::AnalyzerError;
use super::lexicon::LexiconError;
use derive_more::{Display, Error, From};

/// A turn could not be resolved for reasons outside the player's control.
#[derive(Debug, Clone, Display, Error, From)]
pub enum EngineError {
    /// The word analyzer failed.
    #[display("{}", _0)]
    Analyzer(AnalyzerError),

    /// The lexicon could not be loaded.
    #[display("{}", _0)]
    Lexicon(LexiconError),

    /// The analyzer did not answer in time.
    #[display("Analyzer timed out after {} ms", _0)]
    #[from(ignore)]
    AnalyzerTimeout(#[error(not(source))] u64),

    /// The lexicon has no opening word for the start sound.
    #[display("Lexicon has no word starting with {}", _0)]
    #[from(ignore)]
    MissingSeed(#[error(not(source))] char),

    /// A turn was resolved against a chain that was never seeded.
    #[display("Session history is empty")]
    #[from(ignore)]
    EmptyHistory,

    /// The last word in the chain has no sound to continue from.
    #[display("Last chain entry {:?} has no tail sound", _0)]
    #[from(ignore)]
    NoTailSound(#[error(not(source))] String),

    /// A chain invariant would have been broken by the turn.
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}
