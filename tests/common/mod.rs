//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use brsq::analyze::{AnalyzeOptions, Analysis, Analyzer};
use brsq::diagnostics::Severity;
use brsq::document::{Document, Selection};
use brsq::history::SessionHistory;

/// Create a session history seeded with the given queries (first becomes 1)
pub fn seeded_history(queries: &[&str]) -> SessionHistory {
    let mut history = SessionHistory::new();
    for query in queries {
        history.record(*query);
    }
    history
}

/// Run the default pipeline (quote + highlight, no validation) with the
/// caret at the end of the text and no history
pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, &[], AnalyzeOptions::default())
}

/// Run the full pipeline including validation, no history
pub fn analyze_validated(text: &str) -> Analysis {
    analyze_with(text, &[], AnalyzeOptions::with_validation())
}

/// Run the pipeline with seeded history and explicit options
pub fn analyze_with(text: &str, history: &[&str], options: AnalyzeOptions) -> Analysis {
    let analyzer = Analyzer::new();
    let history = seeded_history(history);
    let doc = Document::with_text(text);
    analyzer.analyze(&doc, &history, options).unwrap()
}

/// Run the default pipeline with the caret at a specific char offset
pub fn analyze_at(text: &str, caret: usize) -> Analysis {
    let analyzer = Analyzer::new();
    let history = SessionHistory::new();
    let doc = Document::new(text, Selection::caret(caret)).unwrap();
    analyzer
        .analyze(&doc, &history, AnalyzeOptions::default())
        .unwrap()
}

/// 1-based positions of the error diagnostics, in report order
pub fn error_positions(analysis: &Analysis) -> Vec<usize> {
    analysis
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| d.position)
        .collect()
}

/// All diagnostic messages, in report order
pub fn messages(analysis: &Analysis) -> Vec<&str> {
    analysis
        .diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect()
}
