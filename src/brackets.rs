//! Parenthesis partner scanning.
//!
//! The same balance-counter walk serves two callers: caret-adjacent pair
//! highlighting, and the validator's per-paren balance check. Parens inside
//! quoted literals are text, not structure, and are skipped on both sides.

use crate::diagnostics::MarkSpan;
use crate::util::QuoteParity;

/// Partner offset for the paren at `pos`, or `None` when the scan exhausts
/// the text with the balance still open. `chars[pos]` must be a paren.
pub fn partner_of(chars: &[char], parity: &QuoteParity, pos: usize) -> Option<usize> {
    let mut depth = 1usize;
    if chars[pos] == '(' {
        for (j, &c) in chars.iter().enumerate().skip(pos + 1) {
            if parity.inside(j) {
                continue;
            }
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
        }
    } else {
        for j in (0..pos).rev() {
            if parity.inside(j) {
                continue;
            }
            match chars[j] {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Find the pair for the paren immediately left of the caret (the one most
/// recently typed). Returns `(open, close)` char offsets, or `None` when no
/// paren sits there or it has no partner.
pub fn match_paren(text: &str, caret: usize) -> Option<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let parity = QuoteParity::scan(text);

    let pos = caret.checked_sub(1)?;
    let c = *chars.get(pos)?;
    if (c != '(' && c != ')') || parity.inside(pos) {
        return None;
    }

    let partner = partner_of(&chars, &parity, pos)?;
    Some(if c == '(' {
        (pos, partner)
    } else {
        (partner, pos)
    })
}

/// Emphasis spans for the matched pair at the caret, if any.
pub fn caret_pair_spans(text: &str, caret: usize) -> Vec<MarkSpan> {
    match match_paren(text, caret) {
        Some((open, close)) => vec![
            MarkSpan::emphasis(open..open + 1),
            MarkSpan::emphasis(close..close + 1),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_simple_pair() {
        assert_eq!(match_paren("(cats)", 1), Some((0, 5)));
        assert_eq!(match_paren("(cats)", 6), Some((0, 5)));
    }

    #[test]
    fn test_matches_nested_pairs() {
        let text = "(a or (b and c))";
        assert_eq!(match_paren(text, 7), Some((6, 14)));
        assert_eq!(match_paren(text, 16), Some((0, 15)));
        assert_eq!(match_paren(text, 15), Some((6, 14)));
    }

    #[test]
    fn test_only_the_char_before_the_caret_counts() {
        assert_eq!(match_paren("(cats)", 0), None);
        // Caret between ')(': the just-typed ')' is the one matched.
        assert_eq!(match_paren("(a)(b)", 3), Some((0, 2)));
    }

    #[test]
    fn test_ignores_parens_inside_quotes() {
        assert_eq!(match_paren("(\"a)\" b)", 8), Some((0, 7)));
    }

    #[test]
    fn test_unmatched_paren_has_no_pair() {
        assert_eq!(match_paren("(cats", 1), None);
        assert_eq!(match_paren("cats", 2), None);
        assert!(caret_pair_spans("(cats", 1).is_empty());
    }

    #[test]
    fn test_partner_scans_are_mutual_inverses() {
        let text = "((a) or (b and (c)))";
        let chars: Vec<char> = text.chars().collect();
        let parity = QuoteParity::scan(text);
        for (p, &c) in chars.iter().enumerate() {
            if c != '(' && c != ')' {
                continue;
            }
            let q = partner_of(&chars, &parity, p).unwrap();
            assert_eq!(partner_of(&chars, &parity, q), Some(p));
        }
    }
}
