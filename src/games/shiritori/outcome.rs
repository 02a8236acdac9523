//! Turn outcomes and the reasons a word can be turned down.
//!
//! Rejections are ordinary game results, not errors: the player is asked
//! for another word and the chain is left as it was.

use super::types::SessionState;
use serde::{Deserialize, Serialize};

/// Why a spoken word was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The analyzer produced zero or several segments.
    #[display("Expected one word, got {} segments", segments)]
    MalformedInput {
        /// How many segments the analyzer produced.
        segments: usize,
    },

    /// One segment, but not a noun.
    #[display("Word is not a noun")]
    NotANoun,

    /// The analyzer could not produce a reading.
    #[display("No reading available")]
    NoReading,

    /// The word does not start where the chain left off.
    #[display("Expected a word starting with {}, got {}", expected, found)]
    WrongStartingSound {
        /// Sound the chain ends on.
        expected: char,
        /// Sound the word started with.
        found: char,
    },

    /// The reading was already said in this game.
    #[display("{} was already used", reading)]
    AlreadyUsed {
        /// The repeated reading.
        reading: String,
    },
}

/// Result of resolving one player turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The word was turned down; the player should try again.
    Rejected(Rejection),
    /// The word was accepted and the assistant answers with a counter word.
    Continues {
        /// The assistant's answer, now the last word of the chain.
        counter_word: String,
    },
    /// The player ended on the terminal sound and loses.
    OpponentWins,
    /// The assistant has no word left and the player wins.
    SelfWins,
}

impl TurnOutcome {
    /// Returns true if the game is over after this outcome.
    pub fn ends_game(&self) -> bool {
        matches!(self, TurnOutcome::OpponentWins | TurnOutcome::SelfWins)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            TurnOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Rejected(reason) => write!(f, "Rejected: {}", reason),
            TurnOutcome::Continues { counter_word } => write!(f, "Continues with {}", counter_word),
            TurnOutcome::OpponentWins => write!(f, "Opponent wins"),
            TurnOutcome::SelfWins => write!(f, "Self wins"),
        }
    }
}

/// An outcome paired with the state to keep for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// What happened this turn.
    pub outcome: TurnOutcome,
    /// Session state after the turn.
    pub state: SessionState,
}

impl From<Rejection> for TurnOutcome {
    fn from(reason: Rejection) -> Self {
        TurnOutcome::Rejected(reason)
    }
}
