//! Command-line interface for shiritori.

use clap::{Parser, Subcommand};

/// Shiritori - word-chaining game engine
#[derive(Parser, Debug)]
#[command(name = "shiritori")]
#[command(about = "Turn-resolution engine for the shiritori word game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "shiritori.toml")]
    pub config: std::path::PathBuf,

    /// Lexicon JSON file, overriding the configured one
    #[arg(long, global = true)]
    pub lexicon: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the console
    Play {
        /// Session ID (auto-generated if not provided)
        #[arg(long)]
        session: Option<String>,
    },

    /// List lexicon words starting with a sound
    Words {
        /// Sound to look up (hiragana or katakana). Lists known sounds if omitted.
        sound: Option<String>,
    },

    /// Resolve a single turn against a given chain
    Resolve {
        /// The word the player said
        word: String,

        /// Chain so far, oldest first (defaults to the opening word)
        #[arg(long, num_args = 1..)]
        history: Vec<String>,
    },
}
