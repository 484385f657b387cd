use std::path::PathBuf;

use burncheck_cli::config::{default_config_path, load_config, BurncheckConfig};
use burncheck_storage::file::JsonFileStore;
use serde::Serialize;

use crate::cli::{Cli, Command, OutputFormat};

mod catalog;
mod config;
mod history;
mod score;

/// Resolved global options shared by every command.
pub struct Context {
    pub config: BurncheckConfig,
    pub config_path: PathBuf,
    pub history_override: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Context {
    pub fn store(&self) -> eyre::Result<JsonFileStore> {
        let path = self
            .config
            .resolve_history_path(self.history_override.as_deref())?;
        tracing::debug!(path = %path.display(), "using history file");
        Ok(JsonFileStore::with_capacity(
            path,
            self.config.history_capacity,
        ))
    }

    /// Print `value` as JSON, or `text()` otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> eyre::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => print!("{}", text()),
        }
        Ok(())
    }
}

pub async fn run(cli: Cli) -> eyre::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;
    let ctx = Context {
        config,
        config_path,
        history_override: cli.history_file,
        format: cli.format,
    };

    match cli.command {
        Command::List => catalog::list(&ctx),
        Command::Questions { test } => catalog::questions(&ctx, test),
        Command::Score {
            test,
            answers,
            user,
            strict,
        } => score::run(&ctx, test, &answers, user, strict).await,
        Command::History { user, limit } => history::history(&ctx, user, limit).await,
        Command::Stats { user } => history::stats(&ctx, user).await,
        Command::Config { action } => config::run(&ctx, action),
    }
}
