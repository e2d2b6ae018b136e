//! Numeric auto-quoting through the full pipeline

mod common;

use brsq::analyze::AnalyzeOptions;
use common::{analyze, analyze_with};

// ========================================================================
// Bare numerics
// ========================================================================

#[test]
fn test_free_standing_number_is_quoted() {
    assert_eq!(analyze("10,000 and cats").doc.text(), "\"10,000\" and cats");
    assert_eq!(analyze("(99) or dogs").doc.text(), "(\"99\") or dogs");
}

#[test]
fn test_word_glued_numbers_are_left_alone() {
    assert_eq!(analyze("mp3 and h264").doc.text(), "mp3 and h264");
    assert_eq!(analyze("42nd street").doc.text(), "42nd street");
}

#[test]
fn test_number_matching_a_history_record_stays_bare() {
    let out = analyze_with("2 and 3", &["cats", "dogs"], AnalyzeOptions::default());
    // 2 names a recorded search; 3 does not.
    assert_eq!(out.doc.text(), "2 and \"3\"");
}

#[test]
fn test_history_number_stays_bare_next_to_a_qualifier_too() {
    let out = analyze_with("2.pn.", &["cats", "dogs"], AnalyzeOptions::default());
    assert_eq!(out.doc.text(), "2.pn.");
}

// ========================================================================
// Index-adjacent and range numerics
// ========================================================================

#[test]
fn test_number_glued_to_an_index_qualifier_is_quoted() {
    // Scenario: "123.pn." with no history record for 123.
    let out = analyze("123.pn.");
    assert_eq!(out.doc.text(), "\"123\".pn.");

    let again = analyze(out.doc.text());
    assert_eq!(again.doc.text(), "\"123\".pn.");
}

#[test]
fn test_range_comparison_value_is_quoted() {
    assert_eq!(analyze("@isd>20200101").doc.text(), "@isd>\"20200101\"");
    assert_eq!(analyze("@apd<=2020/01/01").doc.text(), "@apd<=\"2020/01/01\"");
}

#[test]
fn test_range_value_is_quoted_even_when_it_names_a_record() {
    let out = analyze_with("@pta>1", &["cats"], AnalyzeOptions::default());
    assert_eq!(out.doc.text(), "@pta>\"1\"");
}

// ========================================================================
// Stability and bookkeeping
// ========================================================================

#[test]
fn test_already_quoted_numbers_are_not_requoted() {
    assert_eq!(analyze("\"123\" and cats").doc.text(), "\"123\" and cats");
}

#[test]
fn test_unterminated_quote_does_not_suppress_quoting_after_it() {
    assert_eq!(analyze("\"cat 123").doc.text(), "\"cat \"123\"");
}

#[test]
fn test_cursor_tracks_inserted_quotes() {
    // Caret starts at the end of "123.pn." (offset 7) and the two quote
    // chars land before it.
    let out = analyze("123.pn.");
    assert_eq!(out.doc.cursor(), 9);
}

#[test]
fn test_quote_pass_can_be_disabled() {
    let options = AnalyzeOptions {
        quote: false,
        ..Default::default()
    };
    let out = analyze_with("123.pn.", &[], options);
    assert_eq!(out.doc.text(), "123.pn.");
}
