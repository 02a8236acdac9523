//! Turn resolution for shiritori.

use super::analyzer::AnalyzedWord;
use super::contracts::TurnContract;
use super::error::EngineError;
use super::kana::{self, TERMINAL_SOUND};
use super::lexicon::Lexicon;
use super::outcome::{Resolution, TurnOutcome};
use super::types::{ChainHistory, SessionState};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Sound the opening word starts with, as in saying "しりとり".
pub const DEFAULT_START_SOUND: char = 'リ';

/// Stateless turn engine over a shared lexicon.
///
/// All game state lives in [`SessionState`]; every call takes the current
/// state and hands back the next one, so one engine serves any number of
/// sessions.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    lexicon: Arc<Lexicon>,
    start_sound: char,
}

impl TurnEngine {
    /// Creates an engine that opens games on [`DEFAULT_START_SOUND`].
    #[instrument(skip(lexicon), fields(words = lexicon.len()))]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_start_sound(lexicon, DEFAULT_START_SOUND)
    }

    /// Creates an engine with a custom opening sound.
    #[instrument(skip(lexicon))]
    pub fn with_start_sound(lexicon: Arc<Lexicon>, start_sound: char) -> Self {
        info!(%start_sound, "Creating turn engine");
        Self {
            lexicon,
            start_sound,
        }
    }

    /// Returns the lexicon the engine draws counter words from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the opening sound.
    pub fn start_sound(&self) -> char {
        self.start_sound
    }

    /// Starts a game, seeding the chain with the first lexicon word for the
    /// opening sound.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissingSeed` if the lexicon has no such word.
    #[instrument(skip(self))]
    pub fn start(&self) -> Result<SessionState, EngineError> {
        let seed = self
            .lexicon
            .words_starting_with(self.start_sound)
            .first()
            .ok_or_else(|| {
                warn!(start_sound = %self.start_sound, "No opening word in lexicon");
                EngineError::MissingSeed(self.start_sound)
            })?;
        info!(%seed, "Game started");
        Ok(SessionState::new(ChainHistory::seeded(seed.clone())))
    }

    /// Resolves one player turn.
    ///
    /// Checks run in a fixed order and the first failure decides the
    /// outcome. Only `Continues` changes the chain, appending the player's
    /// reading and the counter word together.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyHistory` for an unseeded session,
    /// `EngineError::NoTailSound` if the last entry has no sound to continue
    /// from, and `EngineError::InvariantViolation` if the new chain would be
    /// invalid.
    #[instrument(
        skip(self, state, word),
        fields(raw_text = %word.raw_text(), chain_len = state.history().len())
    )]
    pub fn resolve_turn(
        &self,
        state: &SessionState,
        word: &AnalyzedWord,
    ) -> Result<Resolution, EngineError> {
        let last = state.history().last().ok_or(EngineError::EmptyHistory)?;
        let expected = kana::tail_sound(last).ok_or_else(|| {
            warn!(%last, "Chain entry has no tail sound");
            EngineError::NoTailSound(last.to_string())
        })?;

        let legal = match TurnContract::pre(word, expected, state.history()) {
            Ok(legal) => legal,
            Err(reason) => {
                info!(%reason, "Word rejected");
                return Ok(Resolution {
                    outcome: TurnOutcome::Rejected(reason),
                    state: state.clone(),
                });
            }
        };

        if legal.tail == TERMINAL_SOUND {
            info!(reading = %legal.reading, "Player ended on the terminal sound");
            return Ok(Resolution {
                outcome: TurnOutcome::OpponentWins,
                state: state.clone(),
            });
        }

        let mut excluding: HashSet<&str> = state.history().iter().collect();
        excluding.insert(legal.reading);

        let Some(counter_word) = self
            .lexicon
            .first_unused_starting_with(legal.tail, &excluding)
        else {
            info!(tail = %legal.tail, "No counter word left");
            return Ok(Resolution {
                outcome: TurnOutcome::SelfWins,
                state: state.clone(),
            });
        };

        let mut next = state.clone();
        next.history_mut()
            .push_turn(legal.reading.to_string(), counter_word.to_string());
        TurnContract::post(state, &next)?;

        debug!(reading = %legal.reading, %counter_word, "Turn accepted");
        Ok(Resolution {
            outcome: TurnOutcome::Continues {
                counter_word: counter_word.to_string(),
            },
            state: next,
        })
    }

    /// Leaves the resuming phase, returning the word to re-announce.
    ///
    /// Returns `None` and the state untouched when no resume is pending.
    #[instrument(skip(self, state), fields(awaiting = state.awaiting_resume()))]
    pub fn resume(&self, state: &SessionState) -> (Option<String>, SessionState) {
        if !state.awaiting_resume() {
            return (None, state.clone());
        }

        let mut next = state.clone();
        next.clear_resume();
        let last = next.history().last().map(str::to_string);
        debug!(?last, "Resuming game");
        (last, next)
    }
}
