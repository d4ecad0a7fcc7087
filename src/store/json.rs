//! File-backed score store.
//!
//! The whole log is kept in memory and rewritten to a single pretty-printed
//! JSON file on every append. Each rewrite goes to a temporary file in the
//! same directory which is then renamed over the target, so a crash mid-write
//! leaves the previous log intact.
//!
//! Loading is lenient: a missing, unreadable or malformed file starts the
//! store with an empty log instead of failing. This favours availability over
//! surfacing corruption, so the condition is always logged.

use super::ScoreStore;
use crate::error::StoreError;
use crate::models::Score;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

/// Log file used when nothing else is configured.
pub const DEFAULT_FILENAME: &str = "scores.json";

/// Environment variable naming the log file.
pub const FILENAME_ENV: &str = "SCORES_FILENAME";

/// Score store persisted as a JSON array in one file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    scores: RwLock<Vec<Score>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any existing log.
    ///
    /// Never fails. If the file is absent or cannot be parsed the store
    /// starts empty, and the next append overwrites the file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = load_log(&path);

        Self {
            path,
            scores: RwLock::new(scores),
        }
    }

    /// Open the store at the path named by `SCORES_FILENAME`, or
    /// `scores.json` when unset or empty.
    pub fn from_env() -> Self {
        Self::open(resolve_path(std::env::var_os(FILENAME_ENV)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of scores in the log.
    pub fn len(&self) -> usize {
        match self.scores.read() {
            Ok(scores) => scores.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreStore for JsonFileStore {
    fn append(&self, score: Score) -> Result<(), StoreError> {
        // Held across push and rewrite so concurrent appends cannot drop each other.
        let mut scores = self.scores.write().map_err(|_| StoreError::Poisoned)?;

        debug!("Appending {} to {}", score, self.path.display());
        scores.push(score);

        if let Err(e) = write_log(&self.path, &scores) {
            scores.pop();
            error!("Failed to persist score log: {}", e);
            return Err(e);
        }

        Ok(())
    }

    fn load_all(&self) -> Vec<Score> {
        match self.scores.read() {
            Ok(scores) => scores.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Log path named by `SCORES_FILENAME`, if set to a non-empty value.
pub fn path_from_env() -> Option<PathBuf> {
    env_override(std::env::var_os(FILENAME_ENV))
}

/// An empty value counts as unset.
fn env_override(from_env: Option<OsString>) -> Option<PathBuf> {
    from_env
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Pick the log path from an optional environment value.
fn resolve_path(from_env: Option<OsString>) -> PathBuf {
    env_override(from_env).unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME))
}

/// Read and parse the log, falling back to an empty log on any failure.
fn load_log(path: &Path) -> Vec<Score> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No score log at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!(
                "Failed to read score log {}: {}. Starting with an empty log",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Score>>(&content) {
        Ok(scores) => {
            info!("Loaded {} scores from {}", scores.len(), path.display());
            scores
        }
        Err(e) => {
            warn!(
                "Score log {} is not valid JSON: {}. Starting with an empty log",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Replace the file at `path` with the full log.
fn write_log(path: &Path, scores: &[Score]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(scores)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(path, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| StoreError::io(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(path, e))?;

    // The temp file is created 0600; keep the mode of the log it replaces.
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| StoreError::io(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;

    // The new content is already in place, so a failed flush is not rolled back.
    if let Err(e) = sync_dir(dir) {
        warn!("Failed to sync directory {}: {}", dir.display(), e);
    }

    debug!("Wrote {} scores to {}", scores.len(), path.display());
    Ok(())
}

/// Flush the directory entry so the rename survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
