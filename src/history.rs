//! Prior-search history consulted by the reference resolver.

use serde::{Deserialize, Serialize};

/// One previously submitted query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Position in the session, starting at 1.
    pub number: u32,
    pub query: String,
    /// Display name shown when hovering a resolved reference.
    pub name: String,
}

impl HistoryRecord {
    pub fn new(number: u32, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            number,
            name: query.clone(),
            query,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Lookup interface the analyzer depends on. Only resolved references are
/// decorated; unknown numbers are left as plain text.
pub trait SearchHistory {
    fn lookup(&self, number: u32) -> Option<&HistoryRecord>;
}

/// Append-only in-session history. Numbers are assigned in submission order
/// and never reused.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    records: Vec<HistoryRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a submitted query and return its assigned number.
    pub fn record(&mut self, query: impl Into<String>) -> u32 {
        let number = self.records.len() as u32 + 1;
        self.records.push(HistoryRecord::new(number, query));
        number
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }
}

impl SearchHistory for SessionHistory {
    fn lookup(&self, number: u32) -> Option<&HistoryRecord> {
        if number == 0 {
            return None;
        }
        self.records.get(number as usize - 1)
    }
}

/// History that resolves nothing. Used when analyzing outside a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl SearchHistory for NoHistory {
    fn lookup(&self, _number: u32) -> Option<&HistoryRecord> {
        None
    }
}
