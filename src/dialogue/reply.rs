//! Replies handed back to the voice platform.

use serde::{Deserialize, Serialize};

/// What the platform should do after speaking a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    /// Speak and wait for any intent.
    Ask,
    /// Speak and wait for the next word.
    ElicitWord,
    /// Speak and end the session.
    Tell,
}

/// Speech plus the follow-up the platform should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Text to speak.
    pub speech: String,
    /// Follow-up action.
    pub action: ReplyAction,
}

impl Reply {
    /// Speak and keep the session open.
    pub fn ask(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            action: ReplyAction::Ask,
        }
    }

    /// Speak and wait for a word.
    pub fn elicit(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            action: ReplyAction::ElicitWord,
        }
    }

    /// Speak and close the session.
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            action: ReplyAction::Tell,
        }
    }

    /// Returns true if the platform should close the session.
    pub fn ends_session(&self) -> bool {
        self.action == ReplyAction::Tell
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.speech)
    }
}
