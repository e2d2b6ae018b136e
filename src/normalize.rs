//! Submit-time canonicalization.
//!
//! The one string that crosses the system boundary. Strips anchor markers,
//! collapses whitespace, uppercases operator keywords sitting next to
//! whitespace, and puts a space between an operator and a paren it is glued
//! to. Idempotent: normalizing a normalized string changes nothing.

use crate::analyze::refs::MARKER;
use crate::rules::operators;
use crate::util::QuoteParity;

pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| c != MARKER).collect();
    let collapsed = collapse_whitespace(&stripped);
    let spaced = space_operator_parens(&collapsed);
    uppercase_operators(&spaced)
}

/// Runs of whitespace (newlines included) become one space; ends are
/// trimmed.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_ws = true;
        } else {
            if pending_ws && !out.is_empty() {
                out.push(' ');
            }
            pending_ws = false;
            out.push(c);
        }
    }
    out
}

/// Char ranges of operator keywords outside quotes.
fn operator_words(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let parity = QuoteParity::scan(text);
    let mut words = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_alphanumeric() {
            i += 1;
        }
        if parity.inside(start) {
            continue;
        }
        let word: String = chars[start..i].iter().collect();
        if operators::is_operator(&word) {
            words.push((start, i));
        }
    }
    words
}

fn space_operator_parens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut insert_before: Vec<usize> = Vec::new();
    for (start, end) in operator_words(text) {
        if start > 0 && chars[start - 1] == ')' {
            insert_before.push(start);
        }
        if end < chars.len() && chars[end] == '(' {
            insert_before.push(end);
        }
    }
    if insert_before.is_empty() {
        return text.to_string();
    }
    insert_before.sort_unstable();
    insert_before.dedup();

    let mut out = String::with_capacity(text.len() + insert_before.len());
    let mut pending = insert_before.into_iter().peekable();
    for (i, c) in chars.iter().enumerate() {
        if pending.peek() == Some(&i) {
            out.push(' ');
            pending.next();
        }
        out.push(*c);
    }
    out
}

fn uppercase_operators(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for (start, end) in operator_words(text) {
        let ws_left = start > 0 && chars[start - 1].is_whitespace();
        let ws_right = end < chars.len() && chars[end].is_whitespace();
        if ws_left || ws_right {
            for c in &mut chars[start..end] {
                *c = c.to_ascii_uppercase();
            }
        }
    }
    chars.into_iter().collect()
}
