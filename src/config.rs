//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.topscore.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use topscore::report::OutputFormat;
use topscore::store::DEFAULT_FILENAME;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".topscore.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Score log settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Board output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Score log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON score log.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILENAME)
}

/// Board output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format for `board`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Sort the printed board by score, highest first.
    #[serde(default)]
    pub ranked: bool,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILENAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments and the environment.
    ///
    /// Precedence for the log path: `--file`, then `env_file` (the value of
    /// `SCORES_FILENAME`, `None` when unset or empty), then the config file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args, env_file: Option<PathBuf>) {
        if let Some(ref file) = args.file {
            self.store.path = file.clone();
        } else if let Some(file) = env_file {
            self.store.path = file;
        }

        if let Some(crate::cli::Command::Board { format, ranked }) = &args.command {
            if let Some(format) = format {
                self.report.format = *format;
            }
            if *ranked {
                self.report.ranked = true;
            }
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};
    use clap::Parser;

    fn make_args(command: Option<Command>) -> Args {
        Args {
            command,
            file: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.path, PathBuf::from("scores.json"));
        assert_eq!(config.report.format, OutputFormat::Markdown);
        assert!(!config.report.ranked);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[store]
path = "/var/lib/topscore/board.json"

[report]
format = "json"
ranked = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.store.path,
            PathBuf::from("/var/lib/topscore/board.json")
        );
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.ranked);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[report]\nranked = true\n").unwrap();
        assert_eq!(config.store.path, PathBuf::from("scores.json"));
        assert!(config.report.ranked);
    }

    #[test]
    fn test_cli_file_overrides_config() {
        let mut config: Config = toml::from_str("[store]\npath = \"from_config.json\"\n").unwrap();
        let mut args = make_args(None);
        args.file = Some(PathBuf::from("from_cli.json"));

        config.merge_with_args(&args, None);

        assert_eq!(config.store.path, PathBuf::from("from_cli.json"));
    }

    #[test]
    fn test_config_kept_without_cli_file() {
        let mut config: Config = toml::from_str("[store]\npath = \"from_config.json\"\n").unwrap();
        config.merge_with_args(&make_args(None), None);
        assert_eq!(config.store.path, PathBuf::from("from_config.json"));
    }

    #[test]
    fn test_env_file_overrides_config() {
        let mut config: Config = toml::from_str("[store]\npath = \"from_config.json\"\n").unwrap();
        config.merge_with_args(&make_args(None), Some(PathBuf::from("from_env.json")));
        assert_eq!(config.store.path, PathBuf::from("from_env.json"));
    }

    #[test]
    fn test_cli_file_overrides_env_file() {
        let mut config = Config::default();
        let mut args = make_args(None);
        args.file = Some(PathBuf::from("from_cli.json"));

        config.merge_with_args(&args, Some(PathBuf::from("from_env.json")));

        assert_eq!(config.store.path, PathBuf::from("from_cli.json"));
    }

    #[test]
    fn test_empty_env_file_falls_back_to_default() {
        let args = Args::try_parse_from(["topscore", "board"]).unwrap();
        let mut config = Config::default();

        config.merge_with_args(&args, None);

        assert_eq!(config.store.path, PathBuf::from("scores.json"));
    }

    #[test]
    fn test_board_flags_override_report() {
        let mut config = Config::default();
        let args = make_args(Some(Command::Board {
            format: Some(OutputFormat::Json),
            ranked: true,
        }));

        config.merge_with_args(&args, None);

        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.ranked);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.store.path, PathBuf::from("scores.json"));
    }
}
