//! Word analysis seam: raw utterance text in, segmented readings out.
//!
//! Real deployments plug a morphological analyzer in behind [`WordAnalyzer`].
//! [`KanaAnalyzer`] is the bundled implementation: kana input is read
//! directly, anything else is looked up in an optional user dictionary.

use super::kana;
use async_trait::async_trait;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use strum::Display as StrumDisplay;
use tracing::{debug, info, instrument};

/// Lexical category of a segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Noun. The only category the game accepts.
    Noun,
    /// Verb.
    Verb,
    /// Adjective.
    Adjective,
    /// Particle.
    Particle,
    /// Anything else.
    Other,
}

/// One morphological segment of an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Segment {
    /// Surface text as spoken.
    surface: String,
    /// Katakana reading, if the analyzer could produce one.
    reading: Option<String>,
    /// Lexical category.
    category: Category,
}

/// Analyzer output for one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedWord {
    raw_text: String,
    segments: Vec<Segment>,
}

impl AnalyzedWord {
    /// Creates an analyzed word from its segments.
    pub fn new(raw_text: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            raw_text: raw_text.into(),
            segments,
        }
    }

    /// Shorthand for a single noun segment with the given reading.
    pub fn noun(raw_text: impl Into<String>, reading: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let segment = Segment::new(raw_text.clone(), Some(reading.into()), Category::Noun);
        Self::new(raw_text, vec![segment])
    }

    /// The text handed to the analyzer.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// All segments the analyzer produced.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The single segment, if the input analyzed to exactly one.
    pub fn single_segment(&self) -> Option<&Segment> {
        match self.segments.as_slice() {
            [segment] => Some(segment),
            _ => None,
        }
    }

    /// Reading of the single segment.
    pub fn reading(&self) -> Option<&str> {
        self.single_segment()
            .and_then(|segment| segment.reading.as_deref())
    }

    /// Category of the single segment.
    pub fn category(&self) -> Option<Category> {
        self.single_segment().map(|segment| segment.category)
    }
}

/// Converts raw utterance text into segments with readings.
///
/// Implementations are built once and shared across sessions, so they must
/// not keep per-call state.
#[async_trait]
pub trait WordAnalyzer: Send + Sync + std::fmt::Debug {
    /// Analyzes one utterance.
    async fn analyze(&self, text: &str) -> Result<AnalyzedWord, AnalyzerError>;
}

/// A user dictionary entry for words that are not written in kana.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct DictionaryEntry {
    /// Surface form, e.g. `林檎`.
    surface: String,
    /// Reading, in hiragana or katakana.
    #[serde(default)]
    reading: Option<String>,
    /// Lexical category.
    #[serde(default = "default_category")]
    category: Category,
}

fn default_category() -> Category {
    Category::Noun
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    entries: Vec<DictionaryEntry>,
}

const SEGMENT_SEPARATORS: [char; 3] = ['、', '。', '・'];

/// Kana-reading analyzer with an optional user dictionary.
///
/// Unknown non-kana segments come back as nouns without a reading, the
/// same way a dictionary-based tokenizer reports unknown words.
#[derive(Debug, Clone, Default)]
pub struct KanaAnalyzer {
    dictionary: HashMap<String, DictionaryEntry>,
}

impl KanaAnalyzer {
    /// Creates an analyzer without a user dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer from dictionary entries.
    #[instrument(skip(entries))]
    pub fn with_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let dictionary: HashMap<_, _> = entries
            .into_iter()
            .map(|entry| (entry.surface.clone(), entry))
            .collect();
        info!(entries = dictionary.len(), "Analyzer dictionary ready");
        Self { dictionary }
    }

    /// Loads the user dictionary from a TOML file of `[[entries]]` tables.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_dictionary_file(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        debug!("Loading analyzer dictionary");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AnalyzerError::new(format!("Failed to read dictionary file: {}", e))
        })?;
        let file: DictionaryFile = toml::from_str(&content)
            .map_err(|e| AnalyzerError::new(format!("Failed to parse dictionary: {}", e)))?;
        Ok(Self::with_entries(file.entries))
    }

    fn segment(&self, surface: &str) -> Segment {
        if let Some(entry) = self.dictionary.get(surface) {
            return Segment::new(
                surface.to_string(),
                entry.reading.as_deref().map(kana::to_katakana),
                entry.category,
            );
        }

        let reading = surface
            .chars()
            .all(kana::is_kana)
            .then(|| kana::to_katakana(surface));
        Segment::new(surface.to_string(), reading, Category::Noun)
    }
}

#[async_trait]
impl WordAnalyzer for KanaAnalyzer {
    #[instrument(skip(self))]
    async fn analyze(&self, text: &str) -> Result<AnalyzedWord, AnalyzerError> {
        let segments: Vec<_> = text
            .split(|c: char| c.is_whitespace() || SEGMENT_SEPARATORS.contains(&c))
            .filter(|part| !part.is_empty())
            .map(|part| self.segment(part))
            .collect();
        debug!(segments = segments.len(), "Analyzed utterance");
        Ok(AnalyzedWord::new(text, segments))
    }
}

/// The analyzer could not run at all.
#[derive(Debug, Clone, Display, Error)]
#[display("Analyzer error: {} at {}:{}", message, file, line)]
pub struct AnalyzerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AnalyzerError {
    /// Creates a new analyzer error with caller location tracking.
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
