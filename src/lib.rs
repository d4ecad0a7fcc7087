//! TopScore - best-score leaderboard core.
//!
//! Scores are appended to a durable log through a [`ScoreStore`]; the
//! [`Leaderboard`] reduces that log to the highest score per subject on
//! every read.
//!
//! ```no_run
//! use topscore::{JsonFileStore, Leaderboard, Score};
//!
//! let board = Leaderboard::new(JsonFileStore::from_env());
//! board.store(Score::new(1, "batman@jl.com", 100))?;
//! for entry in board.retrieve() {
//!     println!("{}", entry);
//! }
//! # Ok::<(), topscore::StoreError>(())
//! ```

pub mod error;
pub mod leaderboard;
pub mod models;
pub mod report;
pub mod store;

pub use error::StoreError;
pub use leaderboard::{best_by_subject, Leaderboard};
pub use models::{LeaderboardSummary, Score};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
