//! Data models for the leaderboard.
//!
//! A [`Score`] is one submitted observation. The log of scores is the only
//! durable state; everything else is derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One submitted (identity, score) observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Caller-supplied identifier. Carried through unchanged.
    pub id: i64,
    /// Identity the score belongs to (e.g. an email). Compared byte for byte.
    #[serde(alias = "email")]
    pub subject: String,
    /// Score value.
    #[serde(alias = "score")]
    pub value: i64,
}

impl Score {
    /// Create a new observation.
    pub fn new(id: i64, subject: impl Into<String>, value: i64) -> Self {
        Self {
            id,
            subject: subject.into(),
            value,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} = {}", self.id, self.subject, self.value)
    }
}

/// Summary statistics over the log and its projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSummary {
    /// Number of distinct subjects on the board.
    pub subjects: usize,
    /// Number of observations in the log.
    pub observations: usize,
    /// Highest entry on the board. Earliest wins on ties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Score>,
}

impl LeaderboardSummary {
    /// Build a summary from the raw observation count and the reduced board.
    pub fn from_board(board: &[Score], observations: usize) -> Self {
        let top = board.iter().fold(None::<&Score>, |best, s| match best {
            Some(b) if b.value >= s.value => Some(b),
            _ => Some(s),
        });

        Self {
            subjects: board.len(),
            observations,
            top: top.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_serializes_with_field_names() {
        let score = Score::new(1, "batman@jl.com", 100);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, r#"{"id":1,"subject":"batman@jl.com","value":100}"#);
    }

    #[test]
    fn test_score_accepts_legacy_field_names() {
        let json = r#"{"id": 7, "email": "robin@jl.com", "score": 42}"#;
        let score: Score = serde_json::from_str(json).unwrap();
        assert_eq!(score, Score::new(7, "robin@jl.com", 42));
    }

    #[test]
    fn test_score_display() {
        let score = Score::new(3, "joker@jl.com", 50);
        assert_eq!(score.to_string(), "#3 joker@jl.com = 50");
    }

    #[test]
    fn test_summary_from_board() {
        let board = vec![
            Score::new(2, "batman@jl.com", 200),
            Score::new(3, "joker@jl.com", 50),
            Score::new(4, "robin@jl.com", 200),
        ];

        let summary = LeaderboardSummary::from_board(&board, 5);

        assert_eq!(summary.subjects, 3);
        assert_eq!(summary.observations, 5);
        // Tie at 200: the earlier entry on the board stays on top
        assert_eq!(summary.top, Some(Score::new(2, "batman@jl.com", 200)));
    }

    #[test]
    fn test_summary_empty_board() {
        let summary = LeaderboardSummary::from_board(&[], 0);
        assert_eq!(summary, LeaderboardSummary::default());
    }
}
