//! Numeric auto-quoting.
//!
//! Bare numbers are phrases to the search backend, not numerics, so they
//! must travel inside double quotes. Three ordered sub-passes handle the
//! three places numbers appear; each one commits its edits before the next
//! reads the buffer, keeping every scan linear with a single local offset
//! accumulator.
//!
//! Quoting is idempotent: every sub-pass tests quote parity (a lookahead,
//! so an unterminated quote the user is still typing does not suppress
//! quoting after it) and refuses to touch runs that are already inside
//! quotes.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::edits::{EditError, EditKind, SpanEdit};
use crate::history::SearchHistory;
use crate::util::{byte_to_char, is_numeric_run_char, QuoteParity};

/// Digit/dot/comma run glued to a dotted index qualifier: `123.pn.`.
static INDEX_ADJACENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9.,]+)(\.[A-Za-z]+[0-9]*\.)").expect("index-adjacent numeric pattern")
});

/// Value of a range comparison: `@isd>20200101`. Dates may use slashes.
static RANGE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Za-z]+(?:<=|>=|<|>|=)([0-9][0-9.,/]*)").expect("range value pattern")
});

/// Run all three sub-passes over the document.
pub fn apply(doc: &Document, history: &dyn SearchHistory) -> Result<Document, EditError> {
    let doc = index_adjacent_pass(doc, history)?;
    let doc = range_value_pass(&doc)?;
    bare_numeric_pass(&doc, history)
}

/// Sub-pass 1: a numeric run immediately followed by an index qualifier is
/// quoted, unless it is all punctuation, already quoted, or names a
/// recorded prior search.
fn index_adjacent_pass(doc: &Document, history: &dyn SearchHistory) -> Result<Document, EditError> {
    let text = doc.text();
    let parity = QuoteParity::scan(text);
    let mut edits = Vec::new();
    for caps in INDEX_ADJACENT.captures_iter(text) {
        let Some(run) = caps.get(1) else { continue };
        if !run.as_str().bytes().any(|b| b.is_ascii_digit()) {
            continue;
        }
        let start = byte_to_char(text, run.start());
        if parity.inside(start) {
            continue;
        }
        // The run must start its own token. A letter, quote or stray run
        // char just before it means this is the tail of something else.
        if let Some(prev) = text[..run.start()].chars().next_back() {
            if prev.is_alphanumeric() || prev == '_' || prev == '"' || is_numeric_run_char(prev) {
                continue;
            }
        }
        if names_prior_search(run.as_str(), history) {
            continue;
        }
        let len = run.as_str().chars().count();
        edits.push(SpanEdit::new(
            start..start + len,
            format!("\"{}\"", run.as_str()),
            EditKind::Quote,
        ));
    }
    doc.apply_edits(&edits)
}

/// Sub-pass 2: the value of `@field<op>value` is always quoted. Range
/// comparisons are never history references, so no exemption applies. The
/// pattern requires a digit right after the operator, which makes the pass
/// a no-op once the value is quoted.
fn range_value_pass(doc: &Document) -> Result<Document, EditError> {
    let text = doc.text();
    let parity = QuoteParity::scan(text);
    let mut edits = Vec::new();
    for caps in RANGE_VALUE.captures_iter(text) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if parity.inside(byte_to_char(text, whole.start())) {
            continue;
        }
        let start = byte_to_char(text, value.start());
        let len = value.as_str().chars().count();
        edits.push(SpanEdit::new(
            start..start + len,
            format!("\"{}\"", value.as_str()),
            EditKind::Quote,
        ));
    }
    doc.apply_edits(&edits)
}

/// Sub-pass 3: a free-standing numeric run (whitespace/paren/line bounded)
/// is quoted, unless its exact digits name a recorded prior search, in
/// which case it stays a bare reference number.
fn bare_numeric_pass(doc: &Document, history: &dyn SearchHistory) -> Result<Document, EditError> {
    let text = doc.text();
    let chars: Vec<char> = text.chars().collect();
    let parity = QuoteParity::scan(text);
    let mut edits = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !is_numeric_run_char(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && is_numeric_run_char(chars[i]) {
            i += 1;
        }
        let run: String = chars[start..i].iter().collect();
        if bare_run_quotable(&chars, &parity, start, i, &run, history) {
            edits.push(SpanEdit::new(
                start..i,
                format!("\"{run}\""),
                EditKind::Quote,
            ));
        }
    }
    doc.apply_edits(&edits)
}

fn bare_run_quotable(
    chars: &[char],
    parity: &QuoteParity,
    start: usize,
    end: usize,
    run: &str,
    history: &dyn SearchHistory,
) -> bool {
    if !run.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    if parity.inside(start) {
        return false;
    }
    let left_ok = start == 0 || {
        let p = chars[start - 1];
        p.is_whitespace() || p == '('
    };
    let right_ok = end == chars.len() || {
        let n = chars[end];
        n.is_whitespace() || n == ')'
    };
    if !left_ok || !right_ok {
        return false;
    }
    !names_prior_search(run, history)
}

/// The history exemption: a pure-digit run whose value is a recorded search
/// number stays bare. Runs with separators never parse and never qualify.
fn names_prior_search(run: &str, history: &dyn SearchHistory) -> bool {
    run.bytes().all(|b| b.is_ascii_digit())
        && run
            .parse::<u32>()
            .is_ok_and(|number| history.lookup(number).is_some())
}
