//! Chain link invariant: every word starts where the previous one ended.

use super::super::kana;
use super::super::SessionState;
use super::Invariant;

/// Invariant: each word after the first starts with the tail sound of the
/// word before it (trailing elongation mark ignored).
pub struct ChainLinkedInvariant;

impl Invariant<SessionState> for ChainLinkedInvariant {
    fn holds(state: &SessionState) -> bool {
        let words = state.history().as_slice();
        words.windows(2).all(|pair| {
            let expected = kana::tail_sound(&pair[0]);
            expected.is_some() && kana::head_sound(&pair[1]) == expected
        })
    }

    fn description() -> &'static str {
        "Every word starts with the ending sound of the previous word"
    }
}
