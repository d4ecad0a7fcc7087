//! Markdown and JSON board generation.
//!
//! The JSON form is exactly the retrieved board, so other tools can consume
//! it. The Markdown form adds a header with metadata for humans.

use crate::models::{LeaderboardSummary, Score};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output format for the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown table (default)
    #[default]
    Markdown,
    /// JSON array
    Json,
}

/// Everything needed to render a board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    /// When the board was generated.
    pub generated_at: DateTime<Utc>,
    /// Where the score log lives.
    pub source: String,
    /// Board and log statistics.
    pub summary: LeaderboardSummary,
    /// Board entries in display order.
    pub entries: Vec<Score>,
    /// Whether `entries` was sorted by value.
    pub ranked: bool,
}

impl BoardReport {
    /// Build a report stamped with the current time.
    pub fn new(source: impl Into<String>, entries: Vec<Score>, summary: LeaderboardSummary) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            summary,
            entries,
            ranked: false,
        }
    }
}

/// Render a board in the requested format.
pub fn render(report: &BoardReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(generate_markdown_board(report)),
        OutputFormat::Json => generate_json_board(&report.entries),
    }
}

/// Generate a complete Markdown board.
pub fn generate_markdown_board(report: &BoardReport) -> String {
    let mut output = String::new();

    output.push_str("# Leaderboard\n\n");
    output.push_str(&generate_metadata_section(report));
    output.push_str(&generate_table(&report.entries, report.ranked));

    output
}

fn generate_metadata_section(report: &BoardReport) -> String {
    let mut section = String::new();

    section.push_str(&format!(
        "- **Generated:** {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Score Log:** `{}`\n", report.source));
    section.push_str(&format!("- **Subjects:** {}\n", report.summary.subjects));
    section.push_str(&format!(
        "- **Observations:** {}\n",
        report.summary.observations
    ));
    if let Some(ref top) = report.summary.top {
        section.push_str(&format!(
            "- **Top Score:** {} ({})\n",
            top.value,
            escape_cell(&top.subject)
        ));
    }
    section.push('\n');

    section
}

fn generate_table(entries: &[Score], ranked: bool) -> String {
    if entries.is_empty() {
        return "*No scores yet.*\n".to_string();
    }

    let mut table = String::new();
    let first = if ranked { "Rank" } else { "#" };

    table.push_str(&format!("| {} | Subject | Score | ID |\n", first));
    table.push_str("|---:|---|---:|---:|\n");

    for (i, score) in entries.iter().enumerate() {
        table.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            i + 1,
            escape_cell(&score.subject),
            score.value,
            score.id
        ));
    }

    table
}

/// Keep a subject from breaking the table layout.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Generate the board as a pretty-printed JSON array.
pub fn generate_json_board(entries: &[Score]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
