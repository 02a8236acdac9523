//! Katakana helpers for head/tail sound comparisons.
//!
//! All chain comparisons happen on katakana readings. Hiragana input is
//! folded to katakana before it ever reaches the engine.

/// Elongation mark, ignored when it is the final character of a reading.
pub const LONG_VOWEL_MARK: char = 'ー';

/// The sound no word may start with; ending on it loses the game.
pub const TERMINAL_SOUND: char = 'ン';

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const KATAKANA_OFFSET: u32 = 0x60;

/// Returns the sound a reading starts with.
pub fn head_sound(reading: &str) -> Option<char> {
    reading.chars().next()
}

/// Returns the sound a reading ends with.
///
/// A single trailing elongation mark is stripped first, so `スーパー`
/// ends with `パ`. A reading made only of the mark has no tail.
pub fn tail_sound(reading: &str) -> Option<char> {
    reading
        .strip_suffix(LONG_VOWEL_MARK)
        .unwrap_or(reading)
        .chars()
        .last()
}

/// Folds hiragana to katakana, leaving every other character untouched.
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (HIRAGANA_START..=HIRAGANA_END).contains(&code) {
                char::from_u32(code + KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Returns true for hiragana, katakana and the elongation mark.
pub fn is_kana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{30A1}'..='\u{30FA}') || c == LONG_VOWEL_MARK
}
