//! Static tables of the query language: operators, search indexes,
//! stopwords. Everything here is data plus cheap lookups; the analyzer
//! passes own all behavior.

pub mod fields;
pub mod operators;
pub mod stopwords;

pub use fields::IndexRules;
pub use operators::{ProximityLimits, ProximityOp};
pub use stopwords::StopwordList;
