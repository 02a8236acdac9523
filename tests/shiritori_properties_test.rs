//! Property tests for turn resolution.

use proptest::prelude::*;
use shiritori::{
    AnalyzedWord, ChainHistory, Lexicon, Rejection, SessionState, TurnEngine, TurnOutcome, kana,
};
use std::sync::Arc;

fn engine() -> TurnEngine {
    TurnEngine::new(Arc::new(Lexicon::builtin().unwrap()))
}

fn opening() -> SessionState {
    SessionState::new(ChainHistory::seeded("リンゴ".to_string()))
}

proptest! {
    #[test]
    fn wrong_head_is_rejected_without_change(word in "[ア-ヶ]{1,5}") {
        prop_assume!(kana::head_sound(&word) != Some('ゴ'));
        let engine = engine();
        let before = opening();

        let resolution = engine.resolve_turn(&before, &AnalyzedWord::noun(&word, &word)).unwrap();

        let is_wrong_start = matches!(
            resolution.outcome,
            TurnOutcome::Rejected(Rejection::WrongStartingSound { expected: 'ゴ', .. })
        );
        prop_assert!(is_wrong_start);
        prop_assert_eq!(resolution.state, before);
    }

    #[test]
    fn only_continues_grows_the_chain(rest in "[ア-ヶー]{0,4}") {
        let engine = engine();
        let before = opening();
        let word = format!("ゴ{}", rest);

        let resolution = engine.resolve_turn(&before, &AnalyzedWord::noun(&word, &word)).unwrap();

        match &resolution.outcome {
            TurnOutcome::Continues { counter_word } => {
                let history = resolution.state.history().as_slice();
                prop_assert_eq!(history.len(), before.history().len() + 2);
                prop_assert_eq!(&history[1], &word);
                prop_assert_eq!(&history[2], counter_word);
                prop_assert_eq!(kana::head_sound(counter_word), kana::tail_sound(&word));
                prop_assert_ne!(kana::tail_sound(counter_word), Some(kana::TERMINAL_SOUND));
            }
            _ => {
                prop_assert_eq!(&resolution.state, &before);
            }
        }
    }

    #[test]
    fn history_readings_stay_unique(rests in prop::collection::vec("[ア-ヶ]{0,3}", 1..8)) {
        let engine = engine();
        let mut state = opening();

        for rest in rests {
            let Some(expected) = state.history().last().and_then(kana::tail_sound) else {
                break;
            };
            let word = format!("{}{}", expected, rest);
            let resolution = engine.resolve_turn(&state, &AnalyzedWord::noun(&word, &word)).unwrap();
            if resolution.outcome.ends_game() {
                break;
            }
            state = resolution.state;
        }

        let history = state.history().as_slice();
        let mut sorted = history.to_vec();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), history.len());
    }

    #[test]
    fn rejection_is_idempotent(word in "[ア-ヶ]{1,5}") {
        let engine = engine();
        let before = opening();
        let analyzed = AnalyzedWord::noun(&word, &word);

        let first = engine.resolve_turn(&before, &analyzed).unwrap();
        prop_assume!(matches!(first.outcome, TurnOutcome::Rejected(_)));
        let second = engine.resolve_turn(&first.state, &analyzed).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn trailing_elongation_does_not_change_tail(word in "[ア-ヶ]{1,5}") {
        let elongated = format!("{}ー", word);
        prop_assert_eq!(kana::tail_sound(&elongated), kana::tail_sound(&word));
    }
}
