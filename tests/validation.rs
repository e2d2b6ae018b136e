//! Validator battery through the full pipeline

mod common;

use brsq::analyze::{AnalyzeOptions, Analyzer};
use brsq::config::AnalyzerConfig;
use brsq::diagnostics::Severity;
use brsq::document::Document;
use brsq::history::NoHistory;
use brsq::rules::ProximityLimits;
use common::{analyze, analyze_validated, error_positions, messages};

// ========================================================================
// Exact message text and positions the widget layer depends on
// ========================================================================

#[test]
fn test_proximity_over_the_configured_limit() {
    // "cat near5dog" with NEAR capped at 4.
    let config = AnalyzerConfig {
        proximity: ProximityLimits {
            near: 4,
            ..Default::default()
        },
        ..Default::default()
    };
    let analyzer = Analyzer::from_config(&config);
    let doc = Document::with_text("cat near5dog");
    let out = analyzer
        .analyze(&doc, &NoHistory, AnalyzeOptions::with_validation())
        .unwrap();

    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position, 5);
    assert_eq!(
        out.diagnostics[0].message,
        "NEARN where N>4 is not a supported operator"
    );
}

#[test]
fn test_unmatched_open_paren() {
    let out = analyze_validated("(a and b");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position, 1);
    assert_eq!(out.diagnostics[0].message, "Mis-matched parenthesis");
}

#[test]
fn test_leading_stopword_is_position_one() {
    let out = analyze_validated("the cat");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position, 1);
    assert_eq!(out.diagnostics[0].severity, Severity::Advisory);
    assert_eq!(
        out.diagnostics[0].message,
        "\"the\" will only be searched in metadata fields"
    );
}

// ========================================================================
// The rest of the battery
// ========================================================================

#[test]
fn test_odd_quote_count() {
    let out = analyze_validated("say \"cats");
    assert_eq!(error_positions(&out), [5]);
    assert_eq!(messages(&out), ["Unbalanced quotation marks"]);
}

#[test]
fn test_operator_missing_a_term() {
    let out = analyze_validated("cats and");
    assert_eq!(messages(&out), ["Operator AND is missing a search term"]);
    assert_eq!(error_positions(&out), [6]);
}

#[test]
fn test_unknown_index_code_after_quoting() {
    // Quoting runs first, so the reported position is in "123".zz. not
    // the raw input.
    let out = analyze_validated("123.zz.");
    assert_eq!(out.doc.text(), "\"123\".zz.");
    assert_eq!(error_positions(&out), [7]);
    assert_eq!(messages(&out), ["\"zz\" is not a valid search index"]);
}

#[test]
fn test_stacked_index_qualifiers() {
    let out = analyze_validated("cats.ti.ab.");
    assert_eq!(error_positions(&out), [8]);
    assert_eq!(
        messages(&out),
        ["An index may not directly follow another index"]
    );
}

#[test]
fn test_range_operator_on_unordered_field() {
    let out = analyze_validated("@pn>123");
    assert_eq!(out.doc.text(), "@pn>\"123\"");
    assert_eq!(error_positions(&out), [2]);
    assert_eq!(
        messages(&out),
        ["\"pn\" cannot be searched with a range operator"]
    );
}

#[test]
fn test_range_operator_on_date_field_is_fine() {
    let out = analyze_validated("@isd>=20200101");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_findings_come_back_sorted() {
    let out = analyze_validated("and the (cat");
    let positions: Vec<usize> = out.diagnostics.iter().map(|d| d.position).collect();
    assert_eq!(positions, [1, 5, 9]);
}

#[test]
fn test_validation_is_off_by_default() {
    let out = analyze("(((");
    assert!(out.diagnostics.is_empty());
    assert!(!out.has_errors());
}

#[test]
fn test_advisories_do_not_make_the_query_an_error() {
    let out = analyze_validated("the cat");
    assert!(!out.has_errors());
    let broken = analyze_validated("(cat");
    assert!(broken.has_errors());
}

// ========================================================================
// Config-driven rule tables
// ========================================================================

#[test]
fn test_extra_fields_extend_the_index_table() {
    let config = AnalyzerConfig {
        extra_fields: vec!["xyz".to_string()],
        ..Default::default()
    };
    let analyzer = Analyzer::from_config(&config);
    let doc = Document::with_text("cats.xyz.");
    let out = analyzer
        .analyze(&doc, &NoHistory, AnalyzeOptions::with_validation())
        .unwrap();
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_extra_stopwords_extend_the_list() {
    let config = AnalyzerConfig {
        extra_stopwords: vec!["cats".to_string()],
        ..Default::default()
    };
    let analyzer = Analyzer::from_config(&config);
    let doc = Document::with_text("cats and dogs");
    let out = analyzer
        .analyze(&doc, &NoHistory, AnalyzeOptions::with_validation())
        .unwrap();
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].severity, Severity::Advisory);
    assert_eq!(out.diagnostics[0].position, 1);
}
