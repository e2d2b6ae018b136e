//! Span edits and the offset accumulator.
//!
//! Every analyzer pass describes its work as a sorted list of non-overlapping
//! [`SpanEdit`]s and commits them in one [`Document::apply_edits`] call. The
//! call builds an [`OffsetMap`] - the single accumulator that remaps the
//! selection and any previously emitted spans - so no pass ever does its own
//! offset arithmetic.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{Document, Selection};

/// Why a pass produced an edit. Quote and Anchor edits change text;
/// Emphasis edits are identity replacements that only register a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Emphasis,
    Anchor,
    Quote,
}

/// A single replacement over a char range of the pre-edit text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
    pub range: Range<usize>,
    pub replacement: String,
    pub kind: EditKind,
}

impl SpanEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>, kind: EditKind) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            kind,
        }
    }

    /// Net length change in chars.
    pub fn delta(&self) -> isize {
        self.replacement.chars().count() as isize - self.range.len() as isize
    }
}

/// Contract violations in an edit list. These indicate a bug in the pass
/// that produced the edits, not bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit range {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
    #[error("edit range {start}..{end} exceeds text length {len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("edit list not sorted: edit at {start} follows edit at {prev_start}")]
    Unsorted { prev_start: usize, start: usize },
    #[error("overlapping edits: range ending at {first_end} overlaps range starting at {second_start}")]
    Overlapping {
        first_end: usize,
        second_start: usize,
    },
}

/// Maps pre-edit char offsets to post-edit char offsets for one committed
/// pass.
///
/// The rule is the one from `Document::replace`, applied per edit: an offset
/// at or after an edit's start shifts by that edit's length delta, floored at
/// the splice point so a boundary inside a shrinking replacement cannot cross
/// left of it.
#[derive(Debug, Clone, Default)]
pub struct OffsetMap {
    entries: Vec<MapEntry>,
}

#[derive(Debug, Clone)]
struct MapEntry {
    old: Range<usize>,
    delta: isize,
}

impl OffsetMap {
    fn from_edits(edits: &[SpanEdit]) -> Self {
        Self {
            entries: edits
                .iter()
                .map(|e| MapEntry {
                    old: e.range.clone(),
                    delta: e.delta(),
                })
                .collect(),
        }
    }

    fn single(range: Range<usize>, new_len: usize) -> Self {
        Self {
            entries: vec![MapEntry {
                delta: new_len as isize - range.len() as isize,
                old: range,
            }],
        }
    }

    /// Remap one char offset.
    pub fn map(&self, offset: usize) -> usize {
        let mut acc: isize = 0;
        for e in &self.entries {
            if offset >= e.old.end {
                // Entire edit (or insertion point) at or before the offset.
                acc += e.delta;
            } else if offset >= e.old.start {
                // Offset inside the replaced range: shift with it, but never
                // cross left of the splice point.
                let new_start = e.old.start as isize + acc;
                let shifted = offset as isize + acc + e.delta;
                return shifted.max(new_start) as usize;
            } else {
                break;
            }
        }
        (offset as isize + acc) as usize
    }

    /// Remap an end boundary. Unlike [`OffsetMap::map`], an offset exactly at
    /// an edit's start does not shift: a span ending where an insertion
    /// happens must not stretch over the inserted text.
    pub fn map_end(&self, offset: usize) -> usize {
        let mut acc: isize = 0;
        for e in &self.entries {
            if offset <= e.old.start {
                break;
            }
            if offset >= e.old.end {
                acc += e.delta;
            } else {
                let new_start = e.old.start as isize + acc;
                let shifted = offset as isize + acc + e.delta;
                return shifted.max(new_start) as usize;
            }
        }
        (offset as isize + acc) as usize
    }

    /// Remap a char range: sticky start, end-exclusive end.
    pub fn map_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.map(range.start);
        start..self.map_end(range.end).max(start)
    }

    /// Total length delta of the pass.
    pub fn net_delta(&self) -> isize {
        self.entries.iter().map(|e| e.delta).sum()
    }
}

impl Document {
    /// Splice `replacement` over `range`, shifting any selection boundary at
    /// or after `range.start` by the length delta.
    pub fn replace(&self, range: Range<usize>, replacement: &str) -> Result<Document, EditError> {
        check_range(&range, self.len_chars())?;
        let map = OffsetMap::single(range.clone(), replacement.chars().count());
        let text = splice(self.text(), &[(range, replacement)]);
        Ok(remapped(text, self.selection(), &map))
    }

    /// Apply a pre-sorted, non-overlapping list of edits in one pass,
    /// remapping the selection through the accumulated offsets.
    pub fn apply_edits(&self, edits: &[SpanEdit]) -> Result<Document, EditError> {
        self.apply_edits_mapped(edits).map(|(doc, _)| doc)
    }

    /// Like [`Document::apply_edits`], also returning the [`OffsetMap`] so
    /// the pipeline can remap spans emitted by earlier passes.
    pub fn apply_edits_mapped(
        &self,
        edits: &[SpanEdit],
    ) -> Result<(Document, OffsetMap), EditError> {
        let len = self.len_chars();
        let mut prev: Option<&SpanEdit> = None;
        for edit in edits {
            check_range(&edit.range, len)?;
            if let Some(p) = prev {
                if edit.range.start < p.range.start {
                    return Err(EditError::Unsorted {
                        prev_start: p.range.start,
                        start: edit.range.start,
                    });
                }
                if p.range.end > edit.range.start {
                    return Err(EditError::Overlapping {
                        first_end: p.range.end,
                        second_start: edit.range.start,
                    });
                }
            }
            prev = Some(edit);
        }

        let map = OffsetMap::from_edits(edits);
        let pieces: Vec<(Range<usize>, &str)> = edits
            .iter()
            .map(|e| (e.range.clone(), e.replacement.as_str()))
            .collect();
        let text = splice(self.text(), &pieces);
        Ok((remapped(text, self.selection(), &map), map))
    }
}

fn check_range(range: &Range<usize>, len: usize) -> Result<(), EditError> {
    if range.start > range.end {
        return Err(EditError::Reversed {
            start: range.start,
            end: range.end,
        });
    }
    if range.end > len {
        return Err(EditError::OutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Rebuild the text with every replacement applied. Ranges are char offsets;
/// the byte table avoids quadratic re-scanning.
fn splice(text: &str, pieces: &[(Range<usize>, &str)]) -> String {
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for (range, replacement) in pieces {
        out.push_str(&text[byte_at[cursor]..byte_at[range.start]]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&text[byte_at[cursor]..]);
    out
}

fn remapped(text: String, selection: Selection, map: &OffsetMap) -> Document {
    let selection = Selection::new(map.map(selection.start), map.map(selection.end));
    Document::from_parts(text, selection)
}
