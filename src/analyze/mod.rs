//! The per-event analysis pipeline.
//!
//! Pass order: strip stale anchor markers, auto-quote numerics, pair the
//! caret's paren, emphasize operators, resolve references, then validate on
//! demand. Every pass consumes the committed output of the one before it
//! and never re-invokes an earlier pass; re-analysis is always scheduled by
//! the caller, never by a pass itself.

pub mod emphasis;
pub mod quote;
pub mod refs;

use crate::brackets;
use crate::config::AnalyzerConfig;
use crate::diagnostics::{Diagnostic, MarkSpan};
use crate::document::Document;
use crate::edits::EditError;
use crate::history::SearchHistory;
use crate::rules::{IndexRules, ProximityLimits, StopwordList};
use crate::validate::{self, ValidationContext};

/// Which optional stages run. Quoting and highlighting are on for ordinary
/// keystrokes; validation is opt-in because it is the expensive part and
/// only wanted when the error panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub quote: bool,
    pub highlight: bool,
    pub validate: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            quote: true,
            highlight: true,
            validate: false,
        }
    }
}

impl AnalyzeOptions {
    pub fn with_validation() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }
}

/// Everything one pass over the document produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub doc: Document,
    /// Highlight spans in `doc` offsets, ordered by start.
    pub spans: Vec<MarkSpan>,
    /// Findings over the undecorated text, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// One analyzer per widget session. Holds the rule tables; all per-event
/// state lives in the [`Document`] passed in and the [`Analysis`] handed
/// back.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rules: IndexRules,
    limits: ProximityLimits,
    stopwords: StopwordList,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            rules: IndexRules::with_extra_fields(&config.extra_fields),
            limits: config.proximity,
            stopwords: StopwordList::with_extra(&config.extra_stopwords),
        }
    }

    /// Run the pipeline over one document snapshot.
    ///
    /// Errors are contract violations in edit bookkeeping, not bad input;
    /// user-level problems come back as diagnostics.
    pub fn analyze(
        &self,
        doc: &Document,
        history: &dyn SearchHistory,
        options: AnalyzeOptions,
    ) -> Result<Analysis, EditError> {
        let doc = refs::strip_markers(doc)?;
        let doc = if options.quote {
            quote::apply(&doc, history)?
        } else {
            doc
        };

        // Validation reads this snapshot rather than the decorated buffer,
        // so reported positions line up with what the user sees.
        let snapshot = doc.text().to_string();

        let mut spans = Vec::new();
        if options.highlight {
            spans.extend(brackets::caret_pair_spans(doc.text(), doc.cursor()));
            spans.extend(emphasis::operator_spans(doc.text()));
        }

        let resolution = refs::resolve(&doc, history)?;
        let mut spans: Vec<MarkSpan> = spans
            .into_iter()
            .map(|s| MarkSpan {
                range: resolution.map.map_range(s.range),
                kind: s.kind,
            })
            .collect();
        if options.highlight {
            spans.extend(resolution.anchors);
        }
        spans.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(a.range.end.cmp(&b.range.end))
        });

        let diagnostics = if options.validate {
            self.validate(&snapshot)
        } else {
            Vec::new()
        };

        Ok(Analysis {
            doc: resolution.doc,
            spans,
            diagnostics,
        })
    }

    /// Run the validator battery alone.
    pub fn validate(&self, text: &str) -> Vec<Diagnostic> {
        validate::validate(
            text,
            &ValidationContext {
                rules: &self.rules,
                limits: &self.limits,
                stopwords: &self.stopwords,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MarkKind;
    use crate::document::Selection;
    use crate::history::{NoHistory, SessionHistory};

    #[test]
    fn test_analysis_reaches_a_fixpoint() {
        let mut history = SessionHistory::new();
        history.record("cats");
        let analyzer = Analyzer::new();
        let doc = Document::with_text("l1 and 123.pn.");

        let first = analyzer
            .analyze(&doc, &history, AnalyzeOptions::default())
            .unwrap();
        let second = analyzer
            .analyze(&first.doc, &history, AnalyzeOptions::default())
            .unwrap();
        assert_eq!(first.doc, second.doc);
        assert_eq!(first.spans, second.spans);
    }

    #[test]
    fn test_pipeline_quotes_resolves_and_highlights() {
        let mut history = SessionHistory::new();
        history.record("cat OR dog");
        let analyzer = Analyzer::new();
        let doc = Document::with_text("l1 and 123.pn.");

        let out = analyzer
            .analyze(&doc, &history, AnalyzeOptions::default())
            .unwrap();
        let marker = crate::analyze::refs::MARKER;
        assert_eq!(out.doc.text(), format!("L1{marker} and \"123\".pn."));

        // One anchor over L1, one emphasis over the operator.
        assert_eq!(out.spans.len(), 2);
        assert_eq!(out.spans[0].range, 0..2);
        assert!(matches!(out.spans[0].kind, MarkKind::Anchor { .. }));
        assert_eq!(out.spans[1].range, 4..7);
        assert_eq!(out.spans[1].kind, MarkKind::Emphasis);
        assert_eq!(out.doc.slice(4..7), "and");
    }

    #[test]
    fn test_options_gate_each_stage() {
        let analyzer = Analyzer::new();
        let doc = Document::with_text("(123");

        let quiet = analyzer
            .analyze(
                &doc,
                &NoHistory,
                AnalyzeOptions {
                    quote: false,
                    highlight: false,
                    validate: false,
                },
            )
            .unwrap();
        assert_eq!(quiet.doc.text(), "(123");
        assert!(quiet.spans.is_empty());
        assert!(quiet.diagnostics.is_empty());

        let validated = analyzer
            .analyze(&doc, &NoHistory, AnalyzeOptions::with_validation())
            .unwrap();
        assert!(validated.has_errors());
    }

    #[test]
    fn test_caret_paren_pair_survives_reference_shifts() {
        let mut history = SessionHistory::new();
        history.record("cats");
        let analyzer = Analyzer::new();
        // Caret right after the closing paren.
        let doc = Document::new("(l1 or x)", Selection::caret(9)).unwrap();

        let out = analyzer
            .analyze(&doc, &history, AnalyzeOptions::default())
            .unwrap();
        let marker = crate::analyze::refs::MARKER;
        assert_eq!(out.doc.text(), format!("(L1{marker} or x)"));

        let parens: Vec<_> = out
            .spans
            .iter()
            .filter(|s| s.kind == MarkKind::Emphasis && s.range.len() == 1)
            .collect();
        assert_eq!(parens.len(), 2);
        assert_eq!(parens[0].range, 0..1);
        assert_eq!(parens[1].range, 9..10);
        assert_eq!(out.doc.slice(9..10), ")");
    }

    #[test]
    fn test_validation_positions_ignore_decoration() {
        let mut history = SessionHistory::new();
        history.record("cats");
        let analyzer = Analyzer::new();
        // The anchor marker on l1 must not shift the stopword's position.
        let doc = Document::with_text("l1 and the cat");

        let out = analyzer
            .analyze(&doc, &history, AnalyzeOptions::with_validation())
            .unwrap();
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].position, 8);
    }
}
