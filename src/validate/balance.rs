//! Quote and parenthesis balance checks.

use super::ValidationContext;
use crate::brackets;
use crate::diagnostics::Diagnostic;
use crate::util::QuoteParity;

/// An odd number of quotes leaves one dangling; report it at the last one.
pub(super) fn check_quotes(text: &str, _ctx: &ValidationContext) -> Vec<Diagnostic> {
    let quotes: Vec<usize> = text
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == '"')
        .map(|(i, _)| i)
        .collect();
    match quotes.last() {
        Some(&last) if quotes.len() % 2 == 1 => {
            vec![Diagnostic::error(last, "Unbalanced quotation marks")]
        }
        _ => Vec::new(),
    }
}

/// Every paren outside quotes needs a partner under the same scan the caret
/// highlighter uses. A cheap count-and-order sweep skips the per-paren work
/// for the common balanced case.
pub(super) fn check_brackets(text: &str, _ctx: &ValidationContext) -> Vec<Diagnostic> {
    let chars: Vec<char> = text.chars().collect();
    let parity = QuoteParity::scan(text);

    let mut depth: i64 = 0;
    let mut ordered = true;
    for (i, &c) in chars.iter().enumerate() {
        if parity.inside(i) {
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    ordered = false;
                }
            }
            _ => {}
        }
    }
    if ordered && depth == 0 {
        return Vec::new();
    }

    let mut found = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if parity.inside(i) {
            continue;
        }
        if (c == '(' || c == ')') && brackets::partner_of(&chars, &parity, i).is_none() {
            found.push(Diagnostic::error(i, "Mis-matched parenthesis"));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{IndexRules, ProximityLimits, StopwordList};

    fn ctx_run(check: super::super::Check, text: &str) -> Vec<Diagnostic> {
        let rules = IndexRules::new();
        let limits = ProximityLimits::default();
        let stopwords = StopwordList::new();
        check(
            text,
            &ValidationContext {
                rules: &rules,
                limits: &limits,
                stopwords: &stopwords,
            },
        )
    }

    #[test]
    fn test_odd_quote_count_reports_last_quote() {
        let found = ctx_run(check_quotes, "say \"cats\" and \"dogs");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 16);
        assert_eq!(found[0].message, "Unbalanced quotation marks");
        assert!(ctx_run(check_quotes, "\"cats\"").is_empty());
    }

    #[test]
    fn test_open_paren_without_partner() {
        let found = ctx_run(check_brackets, "(a and b");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 1);
        assert_eq!(found[0].message, "Mis-matched parenthesis");
    }

    #[test]
    fn test_extra_close_paren() {
        let found = ctx_run(check_brackets, "a and b)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 8);
    }

    #[test]
    fn test_outer_unmatched_inner_fine() {
        let found = ctx_run(check_brackets, "((a or b)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 1);
    }

    #[test]
    fn test_quoted_parens_are_ignored() {
        assert!(ctx_run(check_brackets, "(\"a ( b\") and c").is_empty());
    }
}
