//! brsq - analyzer for BRS-style boolean search queries
//!
//! This crate provides the text transformations and validation checks a
//! query widget runs on every keystroke: numeric auto-quoting, history
//! reference resolution, operator and bracket emphasis, and syntax
//! validation, plus the submit-time normalizer.

pub mod analyze;
pub mod brackets;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod diagnostics;
pub mod document;
pub mod edits;
pub mod history;
pub mod normalize;
pub mod rules;
pub mod tokens;
pub mod tracing;
pub mod util;
pub mod validate;

// Re-export commonly used types
pub use analyze::{AnalyzeOptions, Analysis, Analyzer};
pub use config::AnalyzerConfig;
pub use diagnostics::{Diagnostic, MarkKind, MarkSpan, Severity};
pub use document::{Document, Selection};
pub use history::{HistoryRecord, SearchHistory, SessionHistory};
pub use normalize::normalize;
