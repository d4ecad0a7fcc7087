//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topscore::report::OutputFormat;

/// TopScore - best-score leaderboard
///
/// Submit scores and print the board. Only the highest score per
/// subject is shown; every submission is kept in the log.
///
/// Examples:
///   topscore submit --id 1 --subject batman@jl.com --value 100
///   topscore board
///   topscore board --format json --ranked
///   SCORES_FILENAME=/data/scores.json topscore board
///   topscore --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Score log file
    ///
    /// Overrides SCORES_FILENAME and the path in .topscore.toml.
    /// Defaults to scores.json.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .topscore.toml in the current directory
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate a default .topscore.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record one score observation
    Submit {
        /// Opaque identifier stored with the score
        #[arg(long)]
        id: i64,

        /// Identity the score belongs to (e.g. an email)
        #[arg(long, value_name = "SUBJECT")]
        subject: String,

        /// Score value
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Print the best score per subject
    Board {
        /// Output format (markdown, json)
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,

        /// Sort by score, highest first
        #[arg(long)]
        ranked: bool,
    },
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.command.is_none() {
            return Err("A command is required: submit or board".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
