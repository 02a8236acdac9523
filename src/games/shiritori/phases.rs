//! Phases of a shiritori game.

use serde::{Deserialize, Serialize};

/// Where a game stands between turns, as read off a
/// [`SessionState`](super::SessionState).
///
/// This is a derived view: the engine is stateless per call and the
/// conversation itself is driven by the dialogue session's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No chain yet. Starting seeds the opening word.
    Start,
    /// Normal turn resolution.
    Active,
    /// Paused in the help menu; the last word is re-announced first.
    Resuming,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Start => write!(f, "Start"),
            GamePhase::Active => write!(f, "Active"),
            GamePhase::Resuming => write!(f, "Resuming"),
        }
    }
}
