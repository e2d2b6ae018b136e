//! Word-level tokenizer for validation.
//!
//! This is not a parser. Checks only need to know what kind of word sits
//! where, so the text is split on whitespace, parentheses and quotes, and
//! each piece gets a coarse class. All ranges are char offsets.

use std::ops::Range;

use crate::rules::operators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// `"..."`, including an unterminated one running to end of text.
    QuotedLiteral,
    /// Boolean or proximity keyword.
    Operator,
    /// History reference (`L5`, `N3`, `C12`).
    Reference,
    /// Bare qualifier: `.pn.` or `@isd>...`.
    IndexQualifier,
    /// Digits with optional `.`/`,` separators.
    NumericLiteral,
    Open,
    Close,
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: Range<usize>,
    pub text: String,
    pub class: TokenClass,
}

impl Token {
    /// Can this token stand as a search term?
    pub fn is_term(&self) -> bool {
        matches!(
            self.class,
            TokenClass::QuotedLiteral
                | TokenClass::Reference
                | TokenClass::IndexQualifier
                | TokenClass::NumericLiteral
                | TokenClass::PlainText
        )
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == '(' || c == ')' {
            tokens.push(Token {
                range: i..i + 1,
                text: c.to_string(),
                class: if c == '(' {
                    TokenClass::Open
                } else {
                    TokenClass::Close
                },
            });
            i += 1;
        } else if c == '"' {
            // Take everything through the closing quote; an unterminated
            // literal swallows the rest of the line.
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                i += 1;
            }
            if i < chars.len() {
                i += 1;
            }
            tokens.push(Token {
                range: start..i,
                text: chars[start..i].iter().collect(),
                class: TokenClass::QuotedLiteral,
            });
        } else {
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() && !"()\"".contains(chars[i]) {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let class = classify(&text);
            tokens.push(Token {
                range: start..i,
                text,
                class,
            });
        }
    }
    tokens
}

fn classify(word: &str) -> TokenClass {
    if operators::is_operator(word) {
        return TokenClass::Operator;
    }
    if is_reference(word) {
        return TokenClass::Reference;
    }
    if word.starts_with('.') || word.starts_with('@') {
        return TokenClass::IndexQualifier;
    }
    if is_numeric_literal(word) {
        return TokenClass::NumericLiteral;
    }
    TokenClass::PlainText
}

fn is_reference(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some('l' | 'n' | 'c' | 'L' | 'N' | 'C'))
        && word.len() > 1
        && chars.all(|c| c.is_ascii_digit())
}

fn is_numeric_literal(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}
