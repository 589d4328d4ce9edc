//! Zengshan CLI - binary entry point.
//!
//! ```text
//! main() -> Cli::parse() -> init_tracing() -> commands::run()
//!                                               |
//!                         cast | show | catalog | today
//! ```
//!
//! Logs go to `~/.zengshan/logs/zengshan.log` (or `./.zengshan/logs/`), never
//! to stdout, so rendered readings and `--json` output stay clean.

mod commands;

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use zengshan_config::ZengshanConfig;

use crate::commands::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::debug!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No usable log file: keep logs off stdout/stderr entirely.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.zengshan/logs/zengshan.log
    if let Some(config_path) = ZengshanConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("zengshan.log"));
    }

    // Fallback: ./.zengshan/logs/zengshan.log
    candidates.push(PathBuf::from(".zengshan").join("logs").join("zengshan.log"));

    candidates
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    commands::run(cli).await
}
