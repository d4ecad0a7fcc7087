//! TopScore - best-score leaderboard CLI
//!
//! Records score submissions in a JSON log and prints the best score
//! per subject.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Invalid arguments, configuration error or failed write

mod cli;
mod config;

use anyhow::{Context, Result};
use cli::{Args, Command};
use config::{Config, CONFIG_FILENAME};
use std::path::Path;
use topscore::leaderboard::rank;
use topscore::store::path_from_env;
use topscore::report::{self, BoardReport};
use topscore::{JsonFileStore, Leaderboard, Score};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    init_logging(&args);

    debug!("TopScore v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .topscore.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILENAME);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILENAME
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILENAME))?;

    println!("Created {} with default settings.", CONFIG_FILENAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so board output on stdout stays clean.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

/// Wire the store and leaderboard together and dispatch the command.
fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args, path_from_env());

    let board = Leaderboard::new(JsonFileStore::open(config.store.path.clone()));
    let path = board.backing_store().path();
    info!("Using score log {}", path.display());

    match args.command {
        Some(Command::Submit { id, subject, value }) => {
            let score = Score::new(id, subject, value);
            let line = score.to_string();
            board
                .store(score)
                .with_context(|| format!("Failed to store score in {}", path.display()))?;
            println!("Stored {}", line);
        }
        Some(Command::Board { .. }) => {
            let (mut entries, summary) = board.snapshot();
            if config.report.ranked {
                rank(&mut entries);
            }

            let mut board_report = BoardReport::new(path.display().to_string(), entries, summary);
            board_report.ranked = config.report.ranked;

            let output = report::render(&board_report, config.report.format)
                .context("Failed to render board")?;
            println!("{}", output);
        }
        None => anyhow::bail!("No command given"),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILENAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
