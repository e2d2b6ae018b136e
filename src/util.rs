//! Scanning helpers shared by the analyzer passes and the validator.

/// Check if a character can appear in a numeric run (digits plus the
/// comma/period separators users type in number lists and decimals).
pub fn is_numeric_run_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}

/// Check if a character belongs to a word (term, operator, or reference).
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Convert a char offset into a byte offset within `s`.
pub fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Convert a byte offset (as produced by regex matches) into a char offset.
pub fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset.min(s.len())].chars().count()
}

/// Quote positions for a fixed text, answering "is this offset inside a
/// quoted region" in O(log n) per query.
///
/// Parity is counted ahead of the offset: an odd number of `"` characters at
/// or after it means the offset sits inside an open quoted region. Counting
/// ahead rather than behind means an unterminated leading quote does not
/// poison the whole rest of the line.
#[derive(Debug, Clone)]
pub struct QuoteParity {
    /// Char offsets of every `"` in the text, ascending.
    quotes: Vec<usize>,
}

impl QuoteParity {
    pub fn scan(text: &str) -> Self {
        let quotes = text
            .chars()
            .enumerate()
            .filter(|&(_, ch)| ch == '"')
            .map(|(i, _)| i)
            .collect();
        Self { quotes }
    }

    /// True if the char offset lies inside a quoted region.
    pub fn inside(&self, char_offset: usize) -> bool {
        let ahead = self.quotes.len() - self.quotes.partition_point(|&q| q < char_offset);
        ahead % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_parity_inside_and_outside() {
        let parity = QuoteParity::scan(r#"cat "big dog" mouse"#);
        assert!(!parity.inside(0)); // c of cat
        assert!(parity.inside(6)); // i of big
        assert!(parity.inside(9)); // d of dog
        assert!(!parity.inside(14)); // m of mouse
    }

    #[test]
    fn test_quote_parity_opening_quote_is_outside() {
        let parity = QuoteParity::scan(r#""abc""#);
        assert!(!parity.inside(0));
        assert!(parity.inside(2));
    }

    #[test]
    fn test_byte_char_round_trip_non_ascii() {
        let s = "électrode 42";
        let byte = char_to_byte(s, 10);
        assert_eq!(&s[byte..byte + 2], "42");
        assert_eq!(byte_to_char(s, byte), 10);
    }
}
