//! Command-line argument parsing for the analyzer
//!
//! Supports:
//! - Analyzing a query given inline or piped through stdin
//! - Seeding numbered history records for L/N/C reference resolution
//! - Caret placement for parenthesis matching
//! - Plain report or JSON output

use clap::Parser;

use crate::analyze::AnalyzeOptions;

/// A boolean search query analyzer
#[derive(Parser, Debug)]
#[command(name = "brsq", version, about = "A boolean search query analyzer")]
pub struct CliArgs {
    /// Query to analyze (reads stdin when omitted)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Seed a prior query into the session history (repeatable; first becomes L1)
    #[arg(short = 'H', long = "history", value_name = "QUERY")]
    pub history: Vec<String>,

    /// Caret position for parenthesis matching (1-indexed; defaults to end of query)
    #[arg(long, value_name = "N")]
    pub caret: Option<usize>,

    /// Skip the numeric auto-quoting pass
    #[arg(long)]
    pub no_quote: bool,

    /// Skip syntax validation
    #[arg(long)]
    pub no_validate: bool,

    /// Also print the submit-ready normalized form
    #[arg(short = 'n', long)]
    pub normalize: bool,

    /// Emit the full analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// The query source determines where the text comes from
#[derive(Debug, Clone)]
pub enum QuerySource {
    /// Query given on the command line
    Inline(String),
    /// Read the query from stdin
    Stdin,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Where the query text comes from
    pub source: QuerySource,
    /// Caret position - 1-indexed from user, converted to 0-indexed
    pub caret: Option<usize>,
    /// Prior queries to seed into the session history, oldest first
    pub history: Vec<String>,
    /// Which passes to run
    pub options: AnalyzeOptions,
    /// Also print the normalized submit form
    pub normalize: bool,
    /// Emit JSON instead of the plain report
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.caret == Some(0) {
            return Err("Caret position is 1-indexed".to_string());
        }

        let source = match self.query {
            Some(query) => QuerySource::Inline(query),
            None => QuerySource::Stdin,
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let caret = self.caret.map(|n| n - 1);

        let options = AnalyzeOptions {
            quote: !self.no_quote,
            highlight: true,
            validate: !self.no_validate,
        };

        Ok(RunConfig {
            source,
            caret,
            history: self.history,
            options,
            normalize: self.normalize,
            json: self.json,
        })
    }
}
