//! Operator emphasis.
//!
//! Purely cosmetic: every boolean or proximity keyword standing on its own
//! gets an emphasis span. Nothing here changes the text or the outcome of
//! validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::MarkSpan;
use crate::util::{byte_to_char, QuoteParity};

/// Proximity keyword with its count (`NEAR10`), or a bare keyword, bounded
/// by non-word chars on both sides.
static OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(?:adj|near|same|with)[0-9]+|adj|near|same|and|with|not|or|xor)\b")
        .expect("operator pattern")
});

pub fn operator_spans(text: &str) -> Vec<MarkSpan> {
    let parity = QuoteParity::scan(text);
    let mut spans = Vec::new();
    for m in OPERATOR.find_iter(text) {
        let start = byte_to_char(text, m.start());
        if parity.inside(start) {
            continue;
        }
        spans.push(MarkSpan::emphasis(
            start..start + m.as_str().chars().count(),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(text: &str) -> Vec<std::ops::Range<usize>> {
        operator_spans(text).into_iter().map(|s| s.range).collect()
    }

    #[test]
    fn test_keywords_and_counted_proximity_are_spanned() {
        assert_eq!(ranges("cats ADJ3 dogs or mice"), [5..9, 15..17]);
    }

    #[test]
    fn test_quoted_keywords_are_text() {
        assert_eq!(ranges("\"cat and dog\" AND mouse"), [14..17]);
    }

    #[test]
    fn test_word_boundaries_are_required() {
        assert!(ranges("android sandbox near5dog").is_empty());
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(ranges("a XoR b"), [2..5]);
    }
}
