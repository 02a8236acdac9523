//! Spoken prompt templates.

/// Name of the game as announced to the player.
pub const GAME_NAME: &str = "しりとりスキル";

/// Greeting when the skill opens.
pub const START_MESSAGE: &str =
    "しりとりスキルへようこそ。ゲームを始めるには、まず、「しりとり」と言ってみてください。";

/// Reply to an intent the current phase does not handle.
pub const UNHANDLED: &str = "ちょっと何言ってるかわからない。";

/// Help menu prompt.
pub const HELP_MESSAGE: &str =
    "しりとりを続けますか？続ける場合は「はい」、やめる場合は「いいえ」、と言ってください。";

/// Farewell when the player quits.
pub const CANCEL_MESSAGE: &str = "しりとりを終了します。";

/// The assistant ran out of words.
pub const SURRENDER_MESSAGE: &str = "返せる言葉がありません。あなたの勝ちです。";

/// The slot came back empty.
pub const EMPTY_SLOT: &str = "単語が取得できませんでした。違う単語を試してみてください。";

/// The analyzer produced no reading.
pub const NO_READING: &str = "単語の読みがなが取得できません。違う単語を試してみてください。";

/// Something outside the player's control went wrong.
pub const TRY_ANOTHER_WORD: &str = "うまく処理できませんでした。違う単語を試してみてください。";

/// Re-announces the pending word after the help menu.
pub fn resume(last_word: &str) -> String {
    format!("しりとりを再開します。前の単語は、{last_word}です。次の単語を入力してください。")
}

/// The input was not exactly one noun.
pub fn not_a_single_noun(raw_text: &str) -> String {
    format!("{raw_text}、は使えない言葉です。名詞一単語で答えてください。")
}

/// The input started with the wrong sound.
pub fn wrong_starting_sound(reading: &str, expected: char) -> String {
    format!(
        "{reading}は先頭の文字が{expected}ではありません。{expected}から始まる単語を入力してください"
    )
}

/// The input was already said.
pub fn already_used(reading: &str) -> String {
    format!("{reading}は既に使われた単語です。他の単語を入力してください")
}

/// The player ended on the terminal sound.
pub fn terminal_loss(reading: &str) -> String {
    format!("{reading}は、「ん」で終わる単語ですね。しりとりは私の勝ちです。またの挑戦を待っています。")
}
