//! Query document model - immutable text plus the tracked selection.
//!
//! Every analyzer pass consumes a [`Document`] and produces a new one; the
//! widget layer owns the only mutable copy and swaps it wholesale after each
//! call. Offsets throughout are char offsets, not bytes.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::char_to_byte;

/// A selection range in char offsets with `start <= end`.
/// A collapsed selection (`start == end`) is the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the selection is collapsed (caret only)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Invalid selection passed to a [`Document`] constructor.
///
/// These are contract violations: the caller handed in a range the text
/// cannot contain. They are never clamped away silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
    #[error("selection {start}..{end} exceeds text length {len}")]
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// The analyzer's view of the query editor: text plus one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    selection: Selection,
}

impl Document {
    /// Create a document, validating the selection invariant
    /// `0 <= start <= end <= len_chars`.
    pub fn new(text: impl Into<String>, selection: Selection) -> Result<Self, SelectionError> {
        let text = text.into();
        if selection.start > selection.end {
            return Err(SelectionError::Reversed {
                start: selection.start,
                end: selection.end,
            });
        }
        let len = text.chars().count();
        if selection.end > len {
            return Err(SelectionError::OutOfRange {
                start: selection.start,
                end: selection.end,
                len,
            });
        }
        Ok(Self { text, selection })
    }

    /// Create a document with the caret at the end of the text, the state
    /// the widget is in right after the user finished typing.
    pub fn with_text(text: &str) -> Self {
        let len = text.chars().count();
        Self {
            text: text.to_string(),
            selection: Selection::caret(len),
        }
    }

    /// Assemble a document whose parts are already known to satisfy the
    /// selection invariant (remapped output of an edit pass).
    pub(crate) fn from_parts(text: String, selection: Selection) -> Self {
        debug_assert!(selection.start <= selection.end);
        debug_assert!(selection.end <= text.chars().count());
        Self { text, selection }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The cursor position used for bracket matching: the head of the
    /// selection.
    pub fn cursor(&self) -> usize {
        self.selection.end
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get character at a char offset, None if out of bounds
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    /// Slice by char range.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = char_to_byte(&self.text, range.start);
        let end = char_to_byte(&self.text, range.end);
        &self.text[start..end]
    }

    /// Same text, different selection; the selection is re-validated.
    pub fn with_selection(&self, selection: Selection) -> Result<Self, SelectionError> {
        Self::new(self.text.clone(), selection)
    }
}
