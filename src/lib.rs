//! Shiritori library - turn resolution for a voice-assistant word-chaining game
//!
//! Players and the assistant take turns saying nouns; each word must begin
//! with the sound the previous word ended on. A word ending in `ン` loses.
//!
//! # Architecture
//!
//! - **Lexicon**: counter words keyed by head sound, loaded once, read-only
//! - **Analyzer**: turns raw utterance text into segments with readings
//! - **Engine**: stateless turn resolution over a [`SessionState`]
//! - **Session**: one conversation's phase, driven by platform [`Intent`]s
//!
//! # Example
//!
//! ```
//! use shiritori::{AnalyzedWord, Lexicon, TurnEngine, TurnOutcome};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), shiritori::EngineError> {
//! let engine = TurnEngine::new(Arc::new(Lexicon::builtin()?));
//! let state = engine.start()?;
//!
//! let resolution = engine.resolve_turn(&state, &AnalyzedWord::noun("ゴリラ", "ゴリラ"))?;
//! assert!(matches!(resolution.outcome, TurnOutcome::Continues { .. }));
//! assert_eq!(resolution.state.history().len(), 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod dialogue;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, ShiritoriConfig};

// Crate-level exports - Dialogue
pub use dialogue::{Intent, Reply, ReplyAction, speech};

// Crate-level exports - Session management
pub use session::{DialoguePhase, DialogueSession, SessionId};

// Crate-level exports - Game types (shiritori)
pub use games::shiritori::invariants;
pub use games::shiritori::kana;
pub use games::shiritori::{
    AnalyzedWord, AnalyzerError, Category, ChainHistory, DEFAULT_START_SOUND, DictionaryEntry,
    EngineError, GamePhase, HasReading, IsNoun, KanaAnalyzer, LegalWord, Lexicon, LexiconError,
    NotYetUsed, Rejection, Resolution, Segment, SessionState, SingleSegment,
    StartsWithExpectedSound, TurnContract, TurnEngine, TurnOutcome, WordAnalyzer,
};
