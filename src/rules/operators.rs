//! Boolean and proximity operators.

use serde::{Deserialize, Serialize};

/// Keywords that combine two result sets.
pub const BOOLEAN_OPERATORS: [&str; 4] = ["and", "or", "not", "xor"];

/// Keywords that constrain term distance, written with a count suffix
/// (`adj3`, `near5`) or bare (`adj` means `adj1`).
pub const PROXIMITY_OPERATORS: [&str; 4] = ["adj", "near", "same", "with"];

pub fn is_boolean_operator(word: &str) -> bool {
    BOOLEAN_OPERATORS
        .iter()
        .any(|op| op.eq_ignore_ascii_case(word))
}

/// True for a bare proximity keyword or one with a digit suffix.
pub fn is_proximity_operator(word: &str) -> bool {
    parse_proximity(word).is_some()
}

pub fn is_operator(word: &str) -> bool {
    is_boolean_operator(word) || is_proximity_operator(word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProximityOp {
    Adj,
    Near,
    Same,
    With,
}

impl ProximityOp {
    pub fn keyword(self) -> &'static str {
        match self {
            ProximityOp::Adj => "adj",
            ProximityOp::Near => "near",
            ProximityOp::Same => "same",
            ProximityOp::With => "with",
        }
    }

    /// Uppercase form used in diagnostics.
    pub fn display(self) -> &'static str {
        match self {
            ProximityOp::Adj => "ADJ",
            ProximityOp::Near => "NEAR",
            ProximityOp::Same => "SAME",
            ProximityOp::With => "WITH",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("adj") {
            Some(ProximityOp::Adj)
        } else if word.eq_ignore_ascii_case("near") {
            Some(ProximityOp::Near)
        } else if word.eq_ignore_ascii_case("same") {
            Some(ProximityOp::Same)
        } else if word.eq_ignore_ascii_case("with") {
            Some(ProximityOp::With)
        } else {
            None
        }
    }
}

/// Split `near5` into `(Near, Some(5))`, `adj` into `(Adj, None)`. Returns
/// `None` when the word is not a proximity operator at all. A count too
/// large for `u32` saturates; every limit check will reject it anyway.
pub fn parse_proximity(word: &str) -> Option<(ProximityOp, Option<u32>)> {
    let split = word
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let (head, tail) = word.split_at(split);
    let op = ProximityOp::from_keyword(head)?;
    if tail.is_empty() {
        return Some((op, None));
    }
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((op, Some(tail.parse::<u32>().unwrap_or(u32::MAX))))
}

/// Largest count each proximity operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityLimits {
    pub adj: u32,
    pub near: u32,
    pub same: u32,
    pub with: u32,
}

impl Default for ProximityLimits {
    fn default() -> Self {
        Self {
            adj: 99,
            near: 99,
            same: 99,
            with: 99,
        }
    }
}

impl ProximityLimits {
    pub fn limit(&self, op: ProximityOp) -> u32 {
        match op {
            ProximityOp::Adj => self.adj,
            ProximityOp::Near => self.near,
            ProximityOp::Same => self.same,
            ProximityOp::With => self.with,
        }
    }
}
