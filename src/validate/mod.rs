//! Syntax validation.
//!
//! A stateless battery of independent checks over the plain query text.
//! Results are data, not errors: the list is rebuilt from scratch on every
//! run and ordered by position. A fault inside one check must not silence
//! the rest, so each runs behind its own panic boundary; a faulting check
//! is logged and skipped.

mod balance;
mod operators;
mod terms;

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::diagnostics::{sort_diagnostics, Diagnostic};
use crate::rules::{IndexRules, ProximityLimits, StopwordList};

/// Rule tables the checks read.
pub struct ValidationContext<'a> {
    pub rules: &'a IndexRules,
    pub limits: &'a ProximityLimits,
    pub stopwords: &'a StopwordList,
}

type Check = fn(&str, &ValidationContext) -> Vec<Diagnostic>;

const CHECKS: [(&str, Check); 6] = [
    ("quote_balance", balance::check_quotes),
    ("bracket_balance", balance::check_brackets),
    ("operator_operands", operators::check_operands),
    ("proximity_range", operators::check_proximity_range),
    ("stopwords", terms::check_stopwords),
    ("search_indexes", terms::check_indexes),
];

/// Run every check and return the findings sorted by position.
pub fn validate(text: &str, ctx: &ValidationContext) -> Vec<Diagnostic> {
    validate_with(text, ctx, &CHECKS)
}

fn validate_with(text: &str, ctx: &ValidationContext, checks: &[(&str, Check)]) -> Vec<Diagnostic> {
    let mut all = Vec::new();
    for (name, check) in checks {
        match catch_unwind(AssertUnwindSafe(|| check(text, ctx))) {
            Ok(found) => all.extend(found),
            Err(_) => tracing::warn!(check = name, "validator check faulted, skipping"),
        }
    }
    sort_diagnostics(&mut all);
    all
}
