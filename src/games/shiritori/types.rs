//! Core domain types for shiritori: the word chain and per-session state.

use super::phases::GamePhase;
use serde::{Deserialize, Serialize};

/// Ordered readings said so far, in turn order.
///
/// The chain only ever grows by a whole turn (player word, then counter
/// word), so every link stays valid once appended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainHistory {
    words: Vec<String>,
}

impl ChainHistory {
    /// Creates a chain holding only the opening word.
    pub fn seeded(word: impl Into<String>) -> Self {
        Self {
            words: vec![word.into()],
        }
    }

    /// Returns the most recent word.
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Checks whether the reading was already said.
    pub fn contains(&self, reading: &str) -> bool {
        self.words.iter().any(|word| word == reading)
    }

    /// Number of words in the chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the chain in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the chain as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Appends a resolved turn (unchecked - use `TurnEngine::resolve_turn`).
    pub(crate) fn push_turn(&mut self, reading: String, counter_word: String) {
        self.words.push(reading);
        self.words.push(counter_word);
    }
}

impl FromIterator<String> for ChainHistory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Game state owned by one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The word chain.
    history: ChainHistory,
    /// Set while the player is in the help menu and will resume the game.
    awaiting_resume: bool,
}

impl SessionState {
    /// Creates state from an existing chain.
    pub fn new(history: ChainHistory) -> Self {
        Self {
            history,
            awaiting_resume: false,
        }
    }

    /// Returns the word chain.
    pub fn history(&self) -> &ChainHistory {
        &self.history
    }

    /// Returns true if the last word must be re-announced before play.
    pub fn awaiting_resume(&self) -> bool {
        self.awaiting_resume
    }

    /// Marks the game as paused, so the next resume re-announces.
    pub fn mark_resume(&mut self) {
        self.awaiting_resume = true;
    }

    /// Phase this state puts an in-flight game in.
    pub fn phase(&self) -> GamePhase {
        if self.history.is_empty() {
            GamePhase::Start
        } else if self.awaiting_resume {
            GamePhase::Resuming
        } else {
            GamePhase::Active
        }
    }

    pub(crate) fn history_mut(&mut self) -> &mut ChainHistory {
        &mut self.history
    }

    pub(crate) fn clear_resume(&mut self) {
        self.awaiting_resume = false;
    }
}
