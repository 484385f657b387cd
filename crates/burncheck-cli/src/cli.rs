use std::path::PathBuf;

use burncheck_core::models::TestType;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "burncheck",
    version,
    about = "Score burnout questionnaires and track results over time"
)]
pub struct Cli {
    /// Config file (default: <config dir>/burncheck/config.json)
    #[arg(long, global = true, env = "BURNCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// History file, overriding the configured one
    #[arg(long, global = true, env = "BURNCHECK_HISTORY")]
    pub history_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available questionnaires
    List,

    /// Print the questions of a questionnaire
    Questions {
        /// maslach, boyko, heck_hess or quick
        test: TestType,
    },

    /// Score an answer file
    Score {
        test: TestType,

        /// JSON answer file: an array in question order or an object keyed by
        /// question number
        #[arg(long, short)]
        answers: PathBuf,

        /// Save the result to this user's history
        #[arg(long)]
        user: Option<i64>,

        /// Refuse to score answers that fail validation
        #[arg(long)]
        strict: bool,
    },

    /// Show a user's most recent results
    History {
        #[arg(long)]
        user: i64,

        /// Number of entries (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Summarize a user's history
    Stats {
        #[arg(long)]
        user: i64,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
