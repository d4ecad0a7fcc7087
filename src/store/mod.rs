//! Persistence abstraction for the observation log.
//!
//! A [`ScoreStore`] owns the append-only log of submitted scores. It knows
//! nothing about leaderboards; aggregation lives in [`crate::leaderboard`].

pub mod json;
pub mod memory;

pub use json::{path_from_env, JsonFileStore, DEFAULT_FILENAME, FILENAME_ENV};
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::Score;
use std::sync::Arc;

/// Durable, append-only log of scores.
///
/// Implementations must serialize concurrent `append` calls so no update is
/// lost, and should let `load_all` readers proceed in parallel.
pub trait ScoreStore: Send + Sync {
    /// Append one score to the end of the log.
    ///
    /// The score must be durable once this returns `Ok`. No validation or
    /// uniqueness checks are applied.
    fn append(&self, score: Score) -> Result<(), StoreError>;

    /// Return a copy of the whole log in append order.
    fn load_all(&self) -> Vec<Score>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Arc<S> {
    fn append(&self, score: Score) -> Result<(), StoreError> {
        (**self).append(score)
    }

    fn load_all(&self) -> Vec<Score> {
        (**self).load_all()
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn append(&self, score: Score) -> Result<(), StoreError> {
        (**self).append(score)
    }

    fn load_all(&self) -> Vec<Score> {
        (**self).load_all()
    }
}
