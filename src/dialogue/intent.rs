//! Intents a voice platform routes to a shiritori session.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One user utterance, already classified by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "intent", content = "word")]
pub enum Intent {
    /// The skill was opened.
    Launch,
    /// Start a fresh game.
    StartOver,
    /// The player said a word. `None` when the slot came back empty.
    ProvideWord(Option<String>),
    /// Open the help menu.
    Help,
    /// Confirm continuing from the help menu.
    Yes,
    /// Decline continuing from the help menu.
    No,
    /// Pause the game.
    Stop,
    /// Quit immediately.
    Cancel,
    /// Anything the platform could not classify.
    Unrecognized,
}

impl Intent {
    /// Maps a console line to an intent.
    ///
    /// Slash commands and the usual Japanese replies select control
    /// intents; any other text is a word.
    #[instrument]
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Intent::ProvideWord(None),
            "/launch" => Intent::Launch,
            "/start" | "/restart" | "最初から" => Intent::StartOver,
            "/help" | "ヘルプ" => Intent::Help,
            "/yes" | "はい" => Intent::Yes,
            "/no" | "いいえ" => Intent::No,
            "/stop" | "ストップ" => Intent::Stop,
            "/cancel" | "キャンセル" => Intent::Cancel,
            command if command.starts_with('/') => Intent::Unrecognized,
            word => Intent::ProvideWord(Some(word.to_string())),
        }
    }
}
