//! Uniqueness invariant: no reading is said twice.

use super::super::SessionState;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every reading in the chain is distinct.
pub struct UniqueReadingsInvariant;

impl Invariant<SessionState> for UniqueReadingsInvariant {
    fn holds(state: &SessionState) -> bool {
        let mut seen = HashSet::with_capacity(state.history().len());
        state.history().iter().all(|word| seen.insert(word))
    }

    fn description() -> &'static str {
        "No reading appears twice in the chain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::shiritori::ChainHistory;

    #[test]
    fn test_repeat_violates() {
        let history: ChainHistory = ["リンゴ", "ゴリラ", "ラッパ", "パンダ", "ダンゴ", "ゴリラ"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert!(!UniqueReadingsInvariant::holds(&SessionState::new(history)));
    }

    #[test]
    fn test_distinct_holds() {
        let history = ChainHistory::seeded("リンゴ");
        assert!(UniqueReadingsInvariant::holds(&SessionState::new(history)));
    }
}
