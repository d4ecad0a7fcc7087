//! Best-score aggregation.
//!
//! The leaderboard is a projection of the score log: one entry per subject,
//! holding that subject's highest score. It is recomputed from the store on
//! every read and never persisted.

use crate::error::StoreError;
use crate::models::{LeaderboardSummary, Score};
use crate::store::ScoreStore;
use std::collections::HashMap;
use tracing::debug;

/// Leaderboard over a pluggable score store.
#[derive(Debug)]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: ScoreStore> Leaderboard<S> {
    /// Create a leaderboard backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record one observation. Errors from the store are returned as-is.
    pub fn store(&self, score: Score) -> Result<(), StoreError> {
        debug!("Storing {}", score);
        self.store.append(score)
    }

    /// Current best score per subject.
    pub fn retrieve(&self) -> Vec<Score> {
        let log = self.store.load_all();
        let board = best_by_subject(&log);
        debug!(
            "Reduced {} observations to {} entries",
            log.len(),
            board.len()
        );
        board
    }

    /// Board size, log size and top entry.
    pub fn summary(&self) -> LeaderboardSummary {
        self.snapshot().1
    }

    /// Board and summary computed from a single load of the log.
    pub fn snapshot(&self) -> (Vec<Score>, LeaderboardSummary) {
        let log = self.store.load_all();
        let board = best_by_subject(&log);
        let summary = LeaderboardSummary::from_board(&board, log.len());
        (board, summary)
    }

    /// The underlying store.
    pub fn backing_store(&self) -> &S {
        &self.store
    }
}

/// Reduce a log to the highest score per subject.
///
/// A later score replaces the current best only when strictly greater, so
/// the earliest of several equal maxima is kept. Entries are returned in the
/// order their subject first appears in the log; replacing an entry keeps
/// its slot.
pub fn best_by_subject(scores: &[Score]) -> Vec<Score> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut board: Vec<Score> = Vec::new();

    for score in scores {
        match slots.get(score.subject.as_str()).copied() {
            Some(slot) => {
                if score.value > board[slot].value {
                    board[slot] = score.clone();
                }
            }
            None => {
                slots.insert(score.subject.as_str(), board.len());
                board.push(score.clone());
            }
        }
    }

    board
}

/// Sort a board by value, highest first. Equal values keep their order.
pub fn rank(board: &mut [Score]) {
    board.sort_by_key(|s| std::cmp::Reverse(s.value));
}
