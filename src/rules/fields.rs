//! Search index (field) codes and their capabilities.
//!
//! A field appears in a query as a dotted qualifier (`"123".pn.`) or with a
//! range operator (`@isd>20200101`). The tables here are the patent-search
//! defaults; deployments add codes through configuration.

/// Single-purpose field codes, sorted for binary search.
const DEFAULT_FIELDS: [&str; 30] = [
    "ab", "aclm", "an", "apd", "apn", "apt", "asn", "bsum", "ccl", "clm", "cpc", "cpcl", "dd",
    "drwd", "ex", "fld", "gi", "in", "intl", "ipc", "isd", "kd", "pd", "pn", "prad", "pta", "ptad",
    "spec", "ti", "uref",
];

/// Virtual indexes that fan out to several real fields server-side.
const COMPOSITE_FIELDS: [&str; 5] = ["bi", "clms", "date", "name", "txt"];

/// Fields with an ordered value space, usable with `@field<op>value`.
const RANGE_FIELDS: [&str; 6] = ["apd", "isd", "pd", "prad", "pta", "ptad"];

/// Field knowledge for one analyzer instance: the built-in tables plus any
/// deployment-specific extra codes. Extra codes are plain known fields; they
/// never gain range support.
#[derive(Debug, Clone, Default)]
pub struct IndexRules {
    extra: Vec<String>,
}

impl IndexRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: fields
                .into_iter()
                .map(|f| f.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Is `code` a searchable index? Case-insensitive.
    pub fn is_known(&self, code: &str) -> bool {
        let code = code.to_ascii_lowercase();
        DEFAULT_FIELDS.binary_search(&code.as_str()).is_ok()
            || COMPOSITE_FIELDS.binary_search(&code.as_str()).is_ok()
            || self.extra.iter().any(|f| f == &code)
    }

    /// Can `code` be used with a range operator?
    pub fn supports_range(&self, code: &str) -> bool {
        let code = code.to_ascii_lowercase();
        RANGE_FIELDS.binary_search(&code.as_str()).is_ok()
    }

    pub fn is_composite(&self, code: &str) -> bool {
        let code = code.to_ascii_lowercase();
        COMPOSITE_FIELDS.binary_search(&code.as_str()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(DEFAULT_FIELDS.windows(2).all(|w| w[0] < w[1]));
        assert!(COMPOSITE_FIELDS.windows(2).all(|w| w[0] < w[1]));
        assert!(RANGE_FIELDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_known_fields_ignore_case() {
        let rules = IndexRules::new();
        assert!(rules.is_known("pn"));
        assert!(rules.is_known("ISD"));
        assert!(rules.is_known("txt"));
        assert!(!rules.is_known("zz"));
    }

    #[test]
    fn test_range_support() {
        let rules = IndexRules::new();
        assert!(rules.supports_range("isd"));
        assert!(rules.supports_range("APD"));
        assert!(!rules.supports_range("pn"));
        assert!(!rules.supports_range("txt"));
    }

    #[test]
    fn test_extra_fields_are_known_but_not_rangeable() {
        let rules = IndexRules::with_extra_fields(["XYZ"]);
        assert!(rules.is_known("xyz"));
        assert!(!rules.supports_range("xyz"));
    }
}
