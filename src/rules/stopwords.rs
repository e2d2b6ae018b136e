//! Stopwords: terms the full-text engine drops from content fields.
//!
//! Searching one on its own still matches metadata fields, so the validator
//! reports them as advisories rather than errors. Operator keywords and
//! single letters (name initials are searchable) are deliberately absent.

/// Built-in list, sorted for binary search.
const STOPWORDS: [&str; 109] = [
    "about", "above", "after", "again", "all", "also", "am", "an", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "cannot",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "no",
    "nor", "of", "off", "on", "once", "only", "other", "our", "out", "over", "own", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "would", "you", "your",
];

/// The built-in stopwords plus any configured extras.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    extra: Vec<String>,
}

impl StopwordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        STOPWORDS.binary_search(&word.as_str()).is_ok() || self.extra.iter().any(|w| w == &word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted() {
        assert!(STOPWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_common_words_match_case_insensitively() {
        let list = StopwordList::new();
        assert!(list.is_stopword("the"));
        assert!(list.is_stopword("The"));
        assert!(list.is_stopword("WOULD"));
    }

    #[test]
    fn test_operators_and_single_letters_are_not_stopwords() {
        let list = StopwordList::new();
        for word in ["and", "or", "not", "xor", "same", "with", "a", "i"] {
            assert!(!list.is_stopword(word), "{word} must stay searchable");
        }
    }

    #[test]
    fn test_extra_words() {
        let list = StopwordList::with_extra(["Comprising"]);
        assert!(list.is_stopword("comprising"));
        assert!(!StopwordList::new().is_stopword("comprising"));
    }
}
