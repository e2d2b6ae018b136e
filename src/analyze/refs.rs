//! History reference resolution.
//!
//! `L5`-style tokens name prior searches. A token whose number is on record
//! becomes an anchor: uppercased, a marker glyph appended, and a span
//! carrying the referenced query text for hover display. A miss is not an
//! error; the token is just uppercased with no anchor, through the same edit
//! bookkeeping, so downstream offset handling never branches.
//!
//! The marker is how anchors survive re-analysis: the pipeline strips every
//! marker before doing anything else, and stripping subtracts exactly the
//! one char that inserting added.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::MarkSpan;
use crate::document::Document;
use crate::edits::{EditError, EditKind, OffsetMap, SpanEdit};
use crate::history::SearchHistory;
use crate::util::{byte_to_char, QuoteParity};

/// Glyph appended to a resolved reference. Exactly one char.
pub const MARKER: char = '\u{00a7}';

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[cln][0-9]+\b").expect("reference pattern"));

/// Output of one resolver pass.
pub struct Resolution {
    pub doc: Document,
    /// Remaps offsets of the pre-resolution text, for spans emitted by
    /// earlier passes.
    pub map: OffsetMap,
    /// Anchor spans, in post-resolution offsets.
    pub anchors: Vec<MarkSpan>,
}

pub fn resolve(doc: &Document, history: &dyn SearchHistory) -> Result<Resolution, EditError> {
    let text = doc.text();
    let parity = QuoteParity::scan(text);
    let mut edits = Vec::new();
    let mut anchors = Vec::new();
    let mut acc: isize = 0;
    for m in REFERENCE.find_iter(text) {
        let start = byte_to_char(text, m.start());
        if parity.inside(start) {
            continue;
        }
        let len = m.as_str().chars().count();
        let upper = m.as_str().to_ascii_uppercase();
        let record = m.as_str()[1..]
            .parse::<u32>()
            .ok()
            .and_then(|n| history.lookup(n));
        match record {
            Some(record) => {
                let new_start = (start as isize + acc) as usize;
                anchors.push(MarkSpan::anchor(
                    new_start..new_start + len,
                    record.query.clone(),
                ));
                edits.push(SpanEdit::new(
                    start..start + len,
                    format!("{upper}{MARKER}"),
                    EditKind::Anchor,
                ));
                acc += 1;
            }
            None => {
                edits.push(SpanEdit::new(start..start + len, upper, EditKind::Anchor));
            }
        }
    }
    let (doc, map) = doc.apply_edits_mapped(&edits)?;
    Ok(Resolution { doc, map, anchors })
}

/// Delete every marker glyph, restoring pre-anchor offsets exactly.
pub fn strip_markers(doc: &Document) -> Result<Document, EditError> {
    let edits: Vec<SpanEdit> = doc
        .text()
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == MARKER)
        .map(|(i, _)| SpanEdit::new(i..i + 1, "", EditKind::Anchor))
        .collect();
    doc.apply_edits(&edits)
}
