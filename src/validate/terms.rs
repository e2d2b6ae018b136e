//! Term-level checks: stopwords and search index qualifiers.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationContext;
use crate::diagnostics::Diagnostic;
use crate::tokens::{self, TokenClass};
use crate::util::{byte_to_char, QuoteParity};

/// A stopword as a bare standalone term only matches metadata fields.
/// Quoted phrases and operator keywords are exempt by construction.
pub(super) fn check_stopwords(text: &str, ctx: &ValidationContext) -> Vec<Diagnostic> {
    tokens::tokenize(text)
        .into_iter()
        .filter(|t| t.class == TokenClass::PlainText && ctx.stopwords.is_stopword(&t.text))
        .map(|t| {
            Diagnostic::advisory(
                t.range.start,
                format!("\"{}\" will only be searched in metadata fields", t.text),
            )
        })
        .collect()
}

/// Code between `.`/`,`/`|` delimiters: `.pn.` and friends.
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,|]([A-Za-z]+[0-9]*)[.,|]").expect("qualifier pattern"));

/// Field of a range comparison: `@isd>`.
static RANGE_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z]+)(?:<=|>=|<|>|=)").expect("range qualifier pattern"));

struct Qualifier {
    start: usize,
    end: usize,
    code_start: usize,
    code: String,
}

/// Unknown codes, indexes stacked with no term between, and range operators
/// on fields without an ordered value space.
pub(super) fn check_indexes(text: &str, ctx: &ValidationContext) -> Vec<Diagnostic> {
    let parity = QuoteParity::scan(text);
    let chars: Vec<char> = text.chars().collect();
    let mut found = Vec::new();

    let quals = dotted_qualifiers(text, &parity);
    for q in &quals {
        if !ctx.rules.is_known(&q.code) {
            found.push(Diagnostic::error(
                q.code_start,
                format!("\"{}\" is not a valid search index", q.code),
            ));
        }
    }
    for pair in quals.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let stacked = b.start < a.end
            || chars[a.end..b.start].iter().all(|c| c.is_whitespace());
        if stacked {
            found.push(Diagnostic::error(
                b.start,
                "An index may not directly follow another index",
            ));
        }
    }

    for caps in RANGE_QUALIFIER.captures_iter(text) {
        let (Some(whole), Some(field)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if parity.inside(byte_to_char(text, whole.start())) {
            continue;
        }
        let field_start = byte_to_char(text, field.start());
        if !ctx.rules.is_known(field.as_str()) {
            found.push(Diagnostic::error(
                field_start,
                format!("\"{}\" is not a valid search index", field.as_str()),
            ));
        } else if !ctx.rules.supports_range(field.as_str()) {
            found.push(Diagnostic::error(
                field_start,
                format!(
                    "\"{}\" cannot be searched with a range operator",
                    field.as_str()
                ),
            ));
        }
    }

    found
}

/// Collect dotted qualifiers. The search restarts on each match's trailing
/// delimiter so chains like `.pn.ti.` yield every member.
fn dotted_qualifiers(text: &str, parity: &QuoteParity) -> Vec<Qualifier> {
    let mut quals = Vec::new();
    let mut at = 0;
    while at < text.len() {
        let Some(caps) = QUALIFIER.captures_at(text, at) else {
            break;
        };
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        at = whole.end() - 1;
        let start = byte_to_char(text, whole.start());
        if parity.inside(start) {
            continue;
        }
        quals.push(Qualifier {
            start,
            end: byte_to_char(text, whole.end()),
            code_start: byte_to_char(text, code.start()),
            code: code.as_str().to_string(),
        });
    }
    quals
}
