//! The `quizclock play` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use quizclock_core::engine::{GameConfig, GameEngine};
use quizclock_core::parser;
use quizclock_core::source::TokenReader;
use quizclock_report::{set_color_enabled, ConsoleReporter};

use crate::config::load_config_from;

pub async fn execute(
    filename: Option<PathBuf>,
    limit_secs: Option<u64>,
    json: bool,
    no_color: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    if no_color || !config.color {
        set_color_enabled(false);
    }

    let filename = filename.unwrap_or_else(|| config.filename.clone());
    let time_limit = limit_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.time_limit());

    let questions = parser::load_question_file(&filename)
        .with_context(|| format!("failed to load questions from {}", filename.display()))?;

    if questions.is_empty() {
        tracing::warn!("{} contains no questions", filename.display());
    }
    tracing::info!(
        "playing {} questions from {} with a {}s limit",
        questions.len(),
        filename.display(),
        time_limit.as_secs()
    );

    let reporter = ConsoleReporter;
    reporter.print_banner(questions.len(), time_limit);

    let engine = GameEngine::new(GameConfig { time_limit });
    let report = engine
        .play(&questions, TokenReader::stdin(), &reporter)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
