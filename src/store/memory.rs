//! In-process score store with no durability.

use super::ScoreStore;
use crate::error::StoreError;
use crate::models::Score;
use std::sync::RwLock;
use tracing::debug;

/// Score log kept only in memory. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scores: RwLock<Vec<Score>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `scores`, in order.
    pub fn with_scores(scores: Vec<Score>) -> Self {
        Self {
            scores: RwLock::new(scores),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn append(&self, score: Score) -> Result<(), StoreError> {
        let mut scores = self.scores.write().map_err(|_| StoreError::Poisoned)?;
        debug!("Appending {} to in-memory log", score);
        scores.push(score);
        Ok(())
    }

    fn load_all(&self) -> Vec<Score> {
        match self.scores.read() {
            Ok(scores) => scores.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let store = MemoryStore::new();
        store.append(Score::new(1, "batman@jl.com", 100)).unwrap();
        store.append(Score::new(1, "batman@jl.com", 100)).unwrap();
        store.append(Score::new(2, "joker@jl.com", -5)).unwrap();

        let scores = store.load_all();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], scores[1]);
        assert_eq!(scores[2].value, -5);
    }

    #[test]
    fn test_load_all_returns_a_copy() {
        let store = MemoryStore::with_scores(vec![Score::new(1, "batman@jl.com", 100)]);

        let mut copy = store.load_all();
        copy[0].value = 9999;
        copy.clear();

        assert_eq!(store.load_all(), vec![Score::new(1, "batman@jl.com", 100)]);
    }
}
