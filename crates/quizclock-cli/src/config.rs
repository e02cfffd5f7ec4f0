//! Quiz configuration loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizclock configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file with `question,answer` rows.
    #[serde(default = "default_filename")]
    pub filename: PathBuf,
    /// Time budget for the whole quiz, in seconds.
    #[serde(default = "default_limit_secs")]
    pub limit_secs: u64,
    /// Whether to colour console output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_filename() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_limit_secs() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            limit_secs: default_limit_secs(),
            color: true,
        }
    }
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.limit_secs)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizclock.toml` in the current directory
/// 2. `~/.config/quizclock/config.toml`
///
/// Environment variable overrides: `QUIZCLOCK_FILE`, `QUIZCLOCK_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizclock.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(file) = std::env::var("QUIZCLOCK_FILE") {
        config.filename = PathBuf::from(file);
    }

    if let Ok(limit) = std::env::var("QUIZCLOCK_LIMIT") {
        config.limit_secs = limit.trim().parse::<u64>().with_context(|| {
            format!("QUIZCLOCK_LIMIT must be a whole number of seconds, got '{limit}'")
        })?;
    }

    config.filename = PathBuf::from(resolve_env_vars(&config.filename.to_string_lossy()));

    Ok(config)
}

/// Parse a config file body.
pub fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str::<QuizConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizclock"))
}
