//! CLI for qsync.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qsync_core::config;

use commands::{run_config, run_merge, run_remove, run_simulate, run_subjects};

/// Top-level CLI for qsync.
#[derive(Debug, Parser)]
#[command(name = "qsync")]
#[command(about = "qsync: keep a filter value in sync with the page URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Set one query key and print the resulting URL.
    Merge {
        /// Current query string (with or without leading '?').
        query: String,
        /// Key to set.
        key: String,
        /// Value to set.
        value: String,
        /// Page path (defaults to the configured listing route).
        #[arg(long)]
        path: Option<String>,
    },

    /// Remove query keys and print the resulting URL.
    Remove {
        /// Current query string (with or without leading '?').
        query: String,
        /// Keys to remove.
        #[arg(required = true)]
        keys: Vec<String>,
        /// Page path (defaults to the configured listing route).
        #[arg(long)]
        path: Option<String>,
    },

    /// Feed filter values to a controller over an in-memory history and print the navigations.
    Simulate {
        /// Values in input order; pass "" for the empty (no filter) value.
        #[arg(required = true)]
        values: Vec<String>,
        /// Starting page path (defaults to the configured listing route).
        #[arg(long)]
        path: Option<String>,
        /// Starting query string.
        #[arg(long, default_value = "")]
        query: String,
        /// Delay between successive values in milliseconds.
        #[arg(long, default_value = "0", value_name = "MS")]
        gap_ms: u64,
    },

    /// List the options offered by the filter input.
    Subjects,

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Merge {
                query,
                key,
                value,
                path,
            } => run_merge(&cfg, path.as_deref(), &query, &key, &value),
            CliCommand::Remove { query, keys, path } => {
                run_remove(&cfg, path.as_deref(), &query, &keys)
            }
            CliCommand::Simulate {
                values,
                path,
                query,
                gap_ms,
            } => run_simulate(&cfg, path.as_deref(), &query, &values, gap_ms).await?,
            CliCommand::Subjects => run_subjects(&cfg),
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
