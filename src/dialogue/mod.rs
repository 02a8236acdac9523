//! Platform-facing dialogue layer: intents in, spoken replies out.

mod intent;
mod reply;
pub mod speech;

pub use intent::Intent;
pub use reply::{Reply, ReplyAction};
