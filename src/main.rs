//! Shiritori - Unified CLI
//!
//! Console front end for the shiritori turn engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use shiritori::{
    ChainHistory, DialogueSession, Intent, SessionState, ShiritoriConfig,
    WordAnalyzer, kana, speech,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut config = ShiritoriConfig::load_or_default(&cli.config)?;
    if let Some(lexicon) = cli.lexicon {
        config = config.with_lexicon_path(lexicon);
    }

    match cli.command {
        Command::Play { session } => run_play(config, session).await,
        Command::Words { sound } => run_words(config, sound),
        Command::Resolve { word, history } => run_resolve(config, word, history).await,
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
async fn run_play(config: ShiritoriConfig, session_id: Option<String>) -> Result<()> {
    let engine = config.build_engine()?;
    let analyzer: Arc<dyn WordAnalyzer> = Arc::new(config.load_analyzer()?);
    let session_id = session_id.unwrap_or_else(|| format!("console_{}", std::process::id()));

    let mut session =
        DialogueSession::new(session_id, engine, analyzer, config.analyzer_timeout());
    info!(session_id = %session.id(), "Starting console game");

    println!("== {} ==", speech::GAME_NAME);
    println!("{}", session.handle(Intent::Launch).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!("{}", session.handle(Intent::Cancel).await);
                break;
            }
        };

        let Some(line) = line else {
            info!("Input closed");
            break;
        };

        let reply = session.handle(Intent::parse_line(&line)).await;
        println!("{}", reply);
        if reply.ends_session() {
            break;
        }
    }

    Ok(())
}

/// List lexicon entries
#[instrument(skip(config))]
fn run_words(config: ShiritoriConfig, sound: Option<String>) -> Result<()> {
    let lexicon = config.load_lexicon()?;

    let Some(sound) = sound else {
        let sounds: String = lexicon.sounds().into_iter().collect();
        println!("{}", sounds);
        return Ok(());
    };

    let sound = kana::head_sound(&kana::to_katakana(&sound))
        .ok_or_else(|| anyhow::anyhow!("Sound must not be empty"))?;
    let words = lexicon.words_starting_with(sound);
    if words.is_empty() {
        warn!(%sound, "No words for sound");
    }
    for word in words {
        println!("{}", word);
    }
    Ok(())
}

/// Resolve one turn and print the outcome as JSON
#[instrument(skip(config))]
async fn run_resolve(config: ShiritoriConfig, word: String, history: Vec<String>) -> Result<()> {
    let engine = config.build_engine()?;
    let analyzer = config.load_analyzer()?;

    let state = if history.is_empty() {
        engine.start()?
    } else {
        SessionState::new(
            history
                .iter()
                .map(|entry| kana::to_katakana(entry))
                .collect::<ChainHistory>(),
        )
    };

    let analyzed = tokio::time::timeout(config.analyzer_timeout(), analyzer.analyze(&word))
        .await
        .map_err(|_| anyhow::anyhow!("Analyzer timed out"))??;
    let resolution = engine.resolve_turn(&state, &analyzed)?;

    let report = serde_json::json!({
        "outcome": resolution.outcome,
        "history": resolution.state.history(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,shiritori=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
