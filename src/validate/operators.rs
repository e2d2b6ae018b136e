//! Operator placement and proximity count checks.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::rules::operators::ProximityOp;
use crate::tokens::{self, TokenClass};
use crate::util::{byte_to_char, QuoteParity};

/// Every operator needs something searchable on both sides: a term, or a
/// group boundary facing the right way.
pub(super) fn check_operands(text: &str, _ctx: &ValidationContext) -> Vec<Diagnostic> {
    let toks = tokens::tokenize(text);
    let mut found = Vec::new();
    for (k, tok) in toks.iter().enumerate() {
        if tok.class != TokenClass::Operator {
            continue;
        }
        let left_ok = k > 0 && {
            let p = &toks[k - 1];
            p.is_term() || p.class == TokenClass::Close
        };
        let right_ok = k + 1 < toks.len() && {
            let n = &toks[k + 1];
            n.is_term() || n.class == TokenClass::Open
        };
        if !left_ok || !right_ok {
            found.push(Diagnostic::error(
                tok.range.start,
                format!(
                    "Operator {} is missing a search term",
                    tok.text.to_ascii_uppercase()
                ),
            ));
        }
    }
    found
}

/// No right word boundary: `near5dog` is still a malformed NEAR5, not a
/// plain term.
static PROXIMITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(adj|near|same|with)([0-9]+)").expect("proximity pattern"));

pub(super) fn check_proximity_range(text: &str, ctx: &ValidationContext) -> Vec<Diagnostic> {
    let parity = QuoteParity::scan(text);
    let mut found = Vec::new();
    for caps in PROXIMITY.captures_iter(text) {
        let (Some(whole), Some(word), Some(digits)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let start = byte_to_char(text, whole.start());
        if parity.inside(start) {
            continue;
        }
        let Some(op) = ProximityOp::from_keyword(word.as_str()) else {
            continue;
        };
        let n = digits.as_str().parse::<u32>().unwrap_or(u32::MAX);
        let limit = ctx.limits.limit(op);
        if n > limit {
            found.push(Diagnostic::error(
                start,
                format!("{}N where N>{} is not a supported operator", op.display(), limit),
            ));
        }
    }
    found
}
