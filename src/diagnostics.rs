//! Diagnostics and highlight spans reported by an analysis.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// How hard a finding is. Errors make the query unsendable; advisories are
/// shown but do not block submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advisory,
    Error,
}

/// One validation finding, anchored at a 1-based char position in the text
/// that was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub position: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// `offset` is the 0-based char offset of the finding; positions are
    /// reported 1-based.
    pub fn error(offset: usize, message: impl Into<String>) -> Self {
        Self {
            position: offset + 1,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn advisory(offset: usize, message: impl Into<String>) -> Self {
        Self {
            position: offset + 1,
            severity: Severity::Advisory,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// What a highlight span marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum MarkKind {
    /// Recognized operator or paired bracket.
    Emphasis,
    /// Resolved history reference; `title` carries the referenced query's
    /// name for hover display.
    Anchor { title: String },
}

/// A char range of the analyzed text to render specially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSpan {
    pub range: Range<usize>,
    #[serde(flatten)]
    pub kind: MarkKind,
}

impl MarkSpan {
    pub fn emphasis(range: Range<usize>) -> Self {
        Self {
            range,
            kind: MarkKind::Emphasis,
        }
    }

    pub fn anchor(range: Range<usize>, title: impl Into<String>) -> Self {
        Self {
            range,
            kind: MarkKind::Anchor {
                title: title.into(),
            },
        }
    }
}

/// Stable ordering for reporting: by position, errors before advisories at
/// the same spot.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(b.severity.cmp(&a.severity))
    });
}
