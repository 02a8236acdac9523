//! Read-only lexicon of counter words keyed by their head sound.

use super::kana::{self, TERMINAL_SOUND};
use derive_more::{Display, Error};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

const BUILTIN_VOCABULARY: &str = include_str!("../../../data/vocab.json");

/// On-disk shape of a lexicon file: `{"words": {"リ": ["リンゴ", ...]}}`.
///
/// Keys are read in sorted order so that keys folding to the same sound
/// merge the same way on every load.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: BTreeMap<String, Vec<String>>,
}

/// Candidate words grouped by the sound they start with.
///
/// Entry order within a sound is preserved from the source file and decides
/// which counter word the assistant picks.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<char, Vec<String>>,
}

impl Lexicon {
    /// Loads the vocabulary compiled into the binary.
    #[instrument]
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_json_str(BUILTIN_VOCABULARY)
    }

    /// Loads a lexicon from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        debug!("Loading lexicon from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LexiconError::new(format!("Failed to read lexicon file: {}", e)))?;
        Self::from_json_str(&content)
    }

    /// Parses and validates a lexicon from JSON text.
    ///
    /// Keys must be a single sound and every word must start with its key.
    /// Hiragana is folded to katakana; keys that fold to the same sound are
    /// merged, the hiragana key's words first. Words ending in the terminal
    /// sound and duplicates within a sound are dropped.
    #[instrument(skip(json))]
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| LexiconError::new(format!("Failed to parse lexicon: {}", e)))?;

        let mut words: HashMap<char, Vec<String>> = HashMap::with_capacity(file.words.len());
        let mut seen: HashMap<char, HashSet<String>> = HashMap::new();
        for (key, entries) in file.words {
            let key = kana::to_katakana(&key);
            let mut chars = key.chars();
            let sound = match (chars.next(), chars.next()) {
                (Some(sound), None) => sound,
                _ => {
                    return Err(LexiconError::new(format!(
                        "Lexicon key {:?} is not a single sound",
                        key
                    )));
                }
            };

            let seen = seen.entry(sound).or_default();
            let kept = words.entry(sound).or_default();
            for word in entries {
                let word = kana::to_katakana(&word);
                if kana::head_sound(&word) != Some(sound) {
                    return Err(LexiconError::new(format!(
                        "Lexicon word {:?} does not start with {}",
                        word, sound
                    )));
                }
                if kana::tail_sound(&word) == Some(TERMINAL_SOUND) {
                    warn!(%word, "Dropping lexicon word that ends in the terminal sound");
                    continue;
                }
                if !seen.insert(word.clone()) {
                    debug!(%word, "Dropping duplicate lexicon word");
                    continue;
                }
                kept.push(word);
            }
        }

        let lexicon = Self { words };
        info!(
            sounds = lexicon.words.len(),
            words = lexicon.len(),
            "Lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Returns every known word starting with `sound`, in stored order.
    pub fn words_starting_with(&self, sound: char) -> &[String] {
        self.words.get(&sound).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first word starting with `sound` that is not in `excluding`.
    #[instrument(skip(self, excluding), fields(excluded = excluding.len()))]
    pub fn first_unused_starting_with(
        &self,
        sound: char,
        excluding: &HashSet<&str>,
    ) -> Option<&str> {
        let found = self
            .words_starting_with(sound)
            .iter()
            .map(String::as_str)
            .find(|word| !excluding.contains(word));
        debug!(?found, "Looked up counter word");
        found
    }

    /// Total number of words across all sounds.
    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Returns true if the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sounds that have at least one entry, sorted.
    pub fn sounds(&self) -> Vec<char> {
        let mut sounds: Vec<_> = self
            .words
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(sound, _)| *sound)
            .collect();
        sounds.sort_unstable();
        sounds
    }
}

/// Lexicon loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Lexicon error: {} at {}:{}", message, file, line)]
pub struct LexiconError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LexiconError {
    /// Creates a new lexicon error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
