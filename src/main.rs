//! brsq - boolean search query analyzer CLI
//!
//! Runs the analysis pipeline over a single query and prints the
//! transformed text, highlight marks, and validation findings. Exits
//! nonzero when the query has errors, so it can gate submission scripts.

use std::io::Read;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

use brsq::analyze::Analyzer;
use brsq::cli::{CliArgs, QuerySource, RunConfig};
use brsq::config::AnalyzerConfig;
use brsq::diagnostics::{Diagnostic, MarkKind, MarkSpan, Severity};
use brsq::document::{Document, Selection};
use brsq::history::SessionHistory;
use brsq::normalize;

/// Analysis output in the shape the `--json` flag emits.
#[derive(Debug, Serialize)]
struct Report {
    query: String,
    cursor: usize,
    spans: Vec<MarkSpan>,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
}

fn main() -> Result<()> {
    brsq::tracing::init();
    brsq::config_paths::ensure_all_config_dirs();

    let args = CliArgs::parse();
    let run = args.into_config().map_err(|e| anyhow!(e))?;

    let report = analyze_query(&run)?;

    if run.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.diagnostics.iter().any(Diagnostic::is_error) {
        std::process::exit(1);
    }
    Ok(())
}

fn analyze_query(run: &RunConfig) -> Result<Report> {
    let analyzer = Analyzer::from_config(&AnalyzerConfig::load());

    let mut history = SessionHistory::new();
    for query in &run.history {
        history.record(query.as_str());
    }

    let text = read_query(&run.source)?;
    let doc = match run.caret {
        Some(caret) => {
            Document::new(text, Selection::caret(caret)).map_err(|e| anyhow!("--caret: {}", e))?
        }
        None => Document::with_text(&text),
    };

    let analysis = analyzer
        .analyze(&doc, &history, run.options)
        .context("analysis failed")?;

    let normalized = run
        .normalize
        .then(|| normalize::normalize(analysis.doc.text()));

    Ok(Report {
        query: analysis.doc.text().to_string(),
        cursor: analysis.doc.cursor(),
        spans: analysis.spans,
        diagnostics: analysis.diagnostics,
        normalized,
    })
}

fn read_query(source: &QuerySource) -> Result<String> {
    match source {
        QuerySource::Inline(query) => Ok(query.clone()),
        QuerySource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read query from stdin")?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn print_report(report: &Report) {
    println!("{}", report.query);
    if let Some(row) = mark_row(report) {
        println!("{}", row);
    }
    for d in &report.diagnostics {
        println!("  {:>4}  {:<8}  {}", d.position, severity_label(d.severity), d.message);
    }
    if let Some(normalized) = &report.normalized {
        println!("submit: {}", normalized);
    }
}

/// Render the highlight spans as a row under the query: `^` for operator
/// and bracket emphasis, `~` for resolved history references.
fn mark_row(report: &Report) -> Option<String> {
    if report.spans.is_empty() {
        return None;
    }
    let len = report.query.chars().count();
    let mut row = vec![' '; len];
    for span in &report.spans {
        let ch = match span.kind {
            MarkKind::Emphasis => '^',
            MarkKind::Anchor { .. } => '~',
        };
        for slot in row
            .iter_mut()
            .take(span.range.end.min(len))
            .skip(span.range.start)
        {
            *slot = ch;
        }
    }
    let row: String = row.into_iter().collect();
    Some(row.trim_end().to_string())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Advisory => "advisory",
    }
}
