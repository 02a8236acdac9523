mod analyzer;
mod contracts;
mod error;
pub mod invariants;
pub mod kana;
mod lexicon;
mod outcome;
mod phases;
mod rules;
mod types;

pub use analyzer::{
    AnalyzedWord, AnalyzerError, Category, DictionaryEntry, KanaAnalyzer, Segment, WordAnalyzer,
};
pub use contracts::{
    HasReading, IsNoun, LegalWord, NotYetUsed, SingleSegment, StartsWithExpectedSound,
    TurnContract,
};
pub use error::EngineError;
pub use lexicon::{Lexicon, LexiconError};
pub use outcome::{Rejection, Resolution, TurnOutcome};
pub use phases::GamePhase;
pub use rules::{DEFAULT_START_SOUND, TurnEngine};
pub use types::{ChainHistory, SessionState};
