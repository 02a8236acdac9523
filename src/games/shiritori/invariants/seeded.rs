//! Seeded invariant: an active chain is never empty.

use super::super::SessionState;
use super::Invariant;

/// Invariant: the chain holds at least the opening word.
pub struct SeededInvariant;

impl Invariant<SessionState> for SeededInvariant {
    fn holds(state: &SessionState) -> bool {
        !state.history().is_empty()
    }

    fn description() -> &'static str {
        "Chain holds at least the opening word"
    }
}
