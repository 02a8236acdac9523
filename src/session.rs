//! Dialogue session: one conversation's phase and game state.

use crate::dialogue::{Intent, Reply, speech};
use crate::games::shiritori::{
    AnalyzedWord, EngineError, Rejection, Resolution, SessionState, TurnEngine, TurnOutcome,
    WordAnalyzer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Unique identifier for a dialogue session.
pub type SessionId = String;

/// Where the conversation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    /// Fresh session, nothing said yet.
    Launch,
    /// Welcome spoken, waiting for the player to say "しりとり".
    Start,
    /// Words are being exchanged.
    Playing,
    /// Help menu, waiting for yes or no.
    Help,
    /// Session is over.
    Ended,
}

/// One conversation with the player.
///
/// Owns its [`SessionState`] exclusively. The engine and analyzer are
/// shared, read-only resources built once per process.
#[derive(Debug)]
pub struct DialogueSession {
    id: SessionId,
    phase: DialoguePhase,
    state: Option<SessionState>,
    engine: TurnEngine,
    analyzer: Arc<dyn WordAnalyzer>,
    analyzer_timeout: Duration,
}

impl DialogueSession {
    /// Creates a new session in the launch phase.
    #[instrument(skip(engine, analyzer))]
    pub fn new(
        id: SessionId,
        engine: TurnEngine,
        analyzer: Arc<dyn WordAnalyzer>,
        analyzer_timeout: Duration,
    ) -> Self {
        info!(session_id = %id, "Creating dialogue session");
        Self {
            id,
            phase: DialoguePhase::Launch,
            state: None,
            engine,
            analyzer,
            analyzer_timeout,
        }
    }

    /// Session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current phase.
    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    /// Game state, present while a game is running.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Handles one intent and returns what to say.
    ///
    /// State only changes after the analyzer has answered, so dropping the
    /// returned future mid-analysis discards the pending result and leaves
    /// the session exactly as it was.
    #[instrument(skip(self), fields(session_id = %self.id, phase = ?self.phase))]
    pub async fn handle(&mut self, intent: Intent) -> Reply {
        use DialoguePhase::*;

        let reply = match (self.phase, intent) {
            (_, Intent::Launch) => self.new_game(),
            (Launch | Start | Help | Ended, Intent::StartOver) => self.new_game(),
            (Ended, _) => Reply::tell(speech::CANCEL_MESSAGE),
            (Launch | Start | Playing, Intent::Help | Intent::Stop) => self.open_help(),
            (Start, Intent::ProvideWord(_)) => self.seed(),
            (Playing, Intent::ProvideWord(None)) => Reply::elicit(speech::EMPTY_SLOT),
            (Playing, Intent::ProvideWord(Some(text))) => self.take_turn(&text).await,
            (Help, Intent::Help) => Reply::ask(speech::HELP_MESSAGE),
            (Help, Intent::Yes) => self.resume(),
            (Help, Intent::No | Intent::Stop) => self.end(speech::CANCEL_MESSAGE),
            (Launch | Start | Playing | Help, Intent::Cancel) => self.end(speech::CANCEL_MESSAGE),
            (phase, intent) => {
                debug!(?phase, ?intent, "Intent not handled in this phase");
                Reply::ask(speech::UNHANDLED)
            }
        };

        debug!(phase = ?self.phase, action = ?reply.action, "Intent handled");
        reply
    }

    fn new_game(&mut self) -> Reply {
        info!(session_id = %self.id, "Starting new game");
        self.state = None;
        self.phase = DialoguePhase::Start;
        Reply::ask(speech::START_MESSAGE)
    }

    fn seed(&mut self) -> Reply {
        match self.engine.start() {
            Ok(state) => {
                let seed = state.history().last().unwrap_or_default().to_string();
                self.state = Some(state);
                self.phase = DialoguePhase::Playing;
                Reply::elicit(seed)
            }
            Err(e) => self.fatal(e),
        }
    }

    fn open_help(&mut self) -> Reply {
        if let Some(state) = self.state.as_mut() {
            state.mark_resume();
        }
        self.phase = DialoguePhase::Help;
        Reply::ask(speech::HELP_MESSAGE)
    }

    fn resume(&mut self) -> Reply {
        let Some(state) = self.state.take() else {
            return self.new_game();
        };

        let (last_word, resumed) = self.engine.resume(&state);
        self.state = Some(resumed);
        self.phase = DialoguePhase::Playing;

        match last_word {
            Some(word) => Reply::elicit(speech::resume(&word)),
            None => Reply::elicit(speech::EMPTY_SLOT),
        }
    }

    fn end(&mut self, farewell: &str) -> Reply {
        info!(session_id = %self.id, "Ending session");
        self.state = None;
        self.phase = DialoguePhase::Ended;
        Reply::tell(farewell)
    }

    fn fatal(&self, error: EngineError) -> Reply {
        error!(session_id = %self.id, %error, "Turn aborted");
        Reply::elicit(speech::TRY_ANOTHER_WORD)
    }

    async fn analyze(&self, text: &str) -> Result<AnalyzedWord, EngineError> {
        let timeout_ms = u64::try_from(self.analyzer_timeout.as_millis()).unwrap_or(u64::MAX);
        match tokio::time::timeout(self.analyzer_timeout, self.analyzer.analyze(text)).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!(timeout_ms, "Analyzer timed out");
                Err(EngineError::AnalyzerTimeout(timeout_ms))
            }
        }
    }

    #[instrument(skip(self), fields(session_id = %self.id))]
    async fn take_turn(&mut self, text: &str) -> Reply {
        let word = match self.analyze(text).await {
            Ok(word) => word,
            Err(e) => return self.fatal(e),
        };

        let Some(state) = self.state.as_ref() else {
            return self.fatal(EngineError::EmptyHistory);
        };

        let Resolution { outcome, state } = match self.engine.resolve_turn(state, &word) {
            Ok(resolution) => resolution,
            Err(e) => return self.fatal(e),
        };
        info!(%outcome, chain_len = state.history().len(), "Turn resolved");
        self.state = Some(state);

        let reading = word.reading().unwrap_or(word.raw_text());
        match outcome {
            TurnOutcome::Continues { counter_word } => Reply::elicit(counter_word),
            TurnOutcome::OpponentWins => self.end(&speech::terminal_loss(reading)),
            TurnOutcome::SelfWins => self.end(speech::SURRENDER_MESSAGE),
            TurnOutcome::Rejected(reason) => Reply::elicit(match reason {
                Rejection::MalformedInput { .. } | Rejection::NotANoun => {
                    speech::not_a_single_noun(word.raw_text())
                }
                Rejection::NoReading => speech::NO_READING.to_string(),
                Rejection::WrongStartingSound { expected, .. } => {
                    speech::wrong_starting_sound(reading, expected)
                }
                Rejection::AlreadyUsed { reading } => speech::already_used(&reading),
            }),
        }
    }
}
