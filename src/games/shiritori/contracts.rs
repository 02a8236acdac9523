//! Contract-based validation for shiritori turns.
//!
//! Each precondition is a named check producing a [`Rejection`]. They run
//! in a fixed order and the first failure wins. The postcondition verifies
//! the chain invariants on the state a turn produced.

use super::analyzer::{AnalyzedWord, Category, Segment};
use super::error::EngineError;
use super::invariants::{InvariantSet, ShiritoriInvariants};
use super::kana;
use super::outcome::Rejection;
use super::types::{ChainHistory, SessionState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Word Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the analyzer produced exactly one segment.
pub struct SingleSegment;

impl SingleSegment {
    /// Runs the check.
    #[instrument(skip(word), fields(raw_text = %word.raw_text()))]
    pub fn check(word: &AnalyzedWord) -> Result<&Segment, Rejection> {
        word.single_segment().ok_or(Rejection::MalformedInput {
            segments: word.segments().len(),
        })
    }
}

/// Precondition: the segment is a noun.
pub struct IsNoun;

impl IsNoun {
    /// Runs the check.
    #[instrument(skip(segment), fields(category = %segment.category()))]
    pub fn check(segment: &Segment) -> Result<(), Rejection> {
        if *segment.category() == Category::Noun {
            Ok(())
        } else {
            Err(Rejection::NotANoun)
        }
    }
}

/// Precondition: the segment has a reading with both a head and a tail.
pub struct HasReading;

impl HasReading {
    /// Runs the check.
    #[instrument(skip(segment))]
    pub fn check(segment: &Segment) -> Result<(&str, char, char), Rejection> {
        let reading = segment.reading().as_deref().ok_or(Rejection::NoReading)?;
        match (kana::head_sound(reading), kana::tail_sound(reading)) {
            (Some(head), Some(tail)) => Ok((reading, head, tail)),
            _ => Err(Rejection::NoReading),
        }
    }
}

/// Precondition: the word starts where the chain left off.
pub struct StartsWithExpectedSound;

impl StartsWithExpectedSound {
    /// Runs the check.
    #[instrument]
    pub fn check(head: char, expected: char) -> Result<(), Rejection> {
        if head == expected {
            Ok(())
        } else {
            Err(Rejection::WrongStartingSound {
                expected,
                found: head,
            })
        }
    }
}

/// Precondition: the reading was not said before in this game.
pub struct NotYetUsed;

impl NotYetUsed {
    /// Runs the check.
    #[instrument(skip(history), fields(chain_len = history.len()))]
    pub fn check(reading: &str, history: &ChainHistory) -> Result<(), Rejection> {
        if history.contains(reading) {
            Err(Rejection::AlreadyUsed {
                reading: reading.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// A word that passed every precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalWord<'a> {
    /// Katakana reading of the word.
    pub reading: &'a str,
    /// Sound the next word has to start with.
    pub tail: char,
}

// ─────────────────────────────────────────────────────────────
//  Turn Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a player turn.
///
/// Preconditions, in order:
/// - exactly one segment
/// - the segment is a noun
/// - a reading is available
/// - the reading starts with the expected sound
/// - the reading is not a repeat
///
/// Postconditions:
/// - the chain grew by exactly one turn
/// - chain invariants still hold
pub struct TurnContract;

impl TurnContract {
    /// Validates a word against the chain, first failing check wins.
    #[instrument(skip(word, history), fields(raw_text = %word.raw_text()))]
    pub fn pre<'a>(
        word: &'a AnalyzedWord,
        expected: char,
        history: &ChainHistory,
    ) -> Result<LegalWord<'a>, Rejection> {
        let segment = SingleSegment::check(word)?;
        IsNoun::check(segment)?;
        let (reading, head, tail) = HasReading::check(segment)?;
        StartsWithExpectedSound::check(head, expected)?;
        NotYetUsed::check(reading, history)?;
        Ok(LegalWord { reading, tail })
    }

    /// Verifies the state an accepted turn produced.
    #[instrument(skip_all)]
    pub fn post(before: &SessionState, after: &SessionState) -> Result<(), EngineError> {
        let grown = after.history().len();
        let expected = before.history().len() + 2;
        if grown != expected {
            warn!(grown, expected, "Turn did not append exactly two words");
            return Err(EngineError::InvariantViolation(format!(
                "Chain grew to {} words, expected {}",
                grown, expected
            )));
        }

        ShiritoriInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Chain invariants violated");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> ChainHistory {
        ChainHistory::seeded("リンゴ")
    }

    #[test]
    fn test_precondition_accepts_linked_noun() {
        let word = AnalyzedWord::noun("ゴリラ", "ゴリラ");
        let legal = TurnContract::pre(&word, 'ゴ', &history()).unwrap();
        assert_eq!(legal.reading, "ゴリラ");
        assert_eq!(legal.tail, 'ラ');
    }

    #[test]
    fn test_precondition_counts_segments() {
        let word = AnalyzedWord::new("", vec![]);
        assert_eq!(
            TurnContract::pre(&word, 'ゴ', &history()),
            Err(Rejection::MalformedInput { segments: 0 })
        );
    }

    #[test]
    fn test_not_a_noun_beats_missing_reading() {
        let word = AnalyzedWord::new(
            "走る",
            vec![Segment::new("走る".to_string(), None, Category::Verb)],
        );
        assert_eq!(
            TurnContract::pre(&word, 'ゴ', &history()),
            Err(Rejection::NotANoun)
        );
    }

    #[test]
    fn test_reading_of_only_elongation_has_no_tail() {
        let word = AnalyzedWord::noun("ー", "ー");
        assert_eq!(
            TurnContract::pre(&word, 'ゴ', &history()),
            Err(Rejection::NoReading)
        );
    }

    #[test]
    fn test_wrong_sound_beats_already_used() {
        let word = AnalyzedWord::noun("リンゴ", "リンゴ");
        assert_eq!(
            TurnContract::pre(&word, 'ゴ', &history()),
            Err(Rejection::WrongStartingSound {
                expected: 'ゴ',
                found: 'リ'
            })
        );
    }

    #[test]
    fn test_postcondition_detects_partial_turn() {
        let before = SessionState::new(history());
        let after = before.clone();
        assert!(matches!(
            TurnContract::post(&before, &after),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_turn() {
        let before = SessionState::new(history());
        let mut after = before.clone();
        after
            .history_mut()
            .push_turn("ゴリラ".to_string(), "ラッパ".to_string());
        assert!(TurnContract::post(&before, &after).is_ok());
    }
}
