//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use tagrec_engine::{SkippedRecord, StopwordCandidate, SuggestionList, round_score};
use tracing::debug;

/// ANSI escape codes for terminal styling.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints a value as pretty JSON on standard output.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a score for display at the configured precision.
fn format_score(score: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, round_score(score, precision))
}

/// Creates a table with the shared preset and a header row.
fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// Prints one table of suggestions per record.
pub fn print_suggestions(lists: &[SuggestionList], precision: u32) {
    for list in lists {
        println!("{}", header(&list.record_id));
        if list.suggestions.is_empty() {
            println!("  {}", dim("(no suggestions)"));
            println!();
            continue;
        }

        let mut table = new_table(vec!["Tag", "TF-IDF score"]);
        for suggestion in &list.suggestions {
            table.add_row(vec![
                Cell::new(&suggestion.term),
                Cell::new(format_score(suggestion.score, precision))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{table}");
        println!();
    }
}

/// Corpus presence of one term.
#[derive(Debug, Serialize)]
pub struct TermPresence {
    /// The term as normalized by the tokenizer.
    pub term: String,
    /// Number of documents containing the term.
    pub documents: usize,
    /// Percentage of documents containing the term.
    pub percent: f64,
}

/// Prints a presence table.
pub fn print_presence(rows: &[TermPresence], corpus_size: usize) {
    let mut table = new_table(vec!["Term", "Records", "Presence"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.term),
            Cell::new(format!("{}/{corpus_size}", row.documents))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", row.percent)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

/// Prints discovered stop word candidates.
pub fn print_stopword_candidates(candidates: &[StopwordCandidate]) {
    if candidates.is_empty() {
        println!("{}", dim("No stop word candidates found."));
        return;
    }

    let mut table = new_table(vec!["Term", "Top-token share", "Presence"]);
    for candidate in candidates {
        table.add_row(vec![
            Cell::new(&candidate.term),
            Cell::new(format!("{:.1}%", candidate.share * 100.0))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", candidate.presence)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "{}",
        dim("Add terms to [stopwords] extra in .tagrec.toml to exclude them.")
    );
}

/// Reports skipped records and the run totals on standard error.
pub fn report_run(scored: usize, skipped: &[&SkippedRecord]) {
    for record in skipped {
        eprintln!("{}", warning(&format!("warning: skipped {record}")));
    }
    eprintln!("{scored} records scored, {} skipped", skipped.len());
    debug!(scored, skipped = skipped.len(), "run complete");
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scores_are_padded_to_precision() {
        assert_eq!(format_score(0.123456789, 5), "0.12346");
        assert_eq!(format_score(0.0, 3), "0.000");
        assert_eq!(format_score(-0.5, 2), "-0.50");
        assert_eq!(format_score(-0.000001, 5), "0.00000");
    }

    #[test]
    fn styles_wrap_text_in_escape_codes() {
        assert_eq!(dim("x"), "\x1b[2mx\x1b[0m");
        assert!(header("id").contains("id"));
        assert!(warning("w").starts_with("\x1b[33m"));
        assert!(subheader("s").ends_with("\x1b[0m"));
    }
}
