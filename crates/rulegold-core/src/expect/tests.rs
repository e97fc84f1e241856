#![allow(clippy::expect_used)]

use super::*;

fn diag(line: u32, column: Option<u32>, text: &str) -> Diagnostic {
    Diagnostic::new(line, column, "k", Vec::new(), text)
}

// ── parsing ──────────────────────────────────────────────────────────────

#[test]
fn parses_line_only_entry() {
    let e = ExpectedEntry::parse("27: Line contains a tab character.").expect("valid");
    assert_eq!(e.line(), 27);
    assert_eq!(e.column(), None);
    assert_eq!(e.literal(), "27: Line contains a tab character.");
}

#[test]
fn parses_line_and_column_entry() {
    let e = ExpectedEntry::parse("13:9: Using a static member import should be avoided - x.")
        .expect("valid");
    assert_eq!(e.line(), 13);
    assert_eq!(e.column(), Some(9));
}

#[test]
fn parses_harness_level_entry_at_line_zero() {
    let e = ExpectedEntry::parse("0: /tmp/gone.java (No such file or directory)").expect("valid");
    assert_eq!(e.line(), 0);
    assert_eq!(e.column(), None);
}

#[test]
fn parses_empty_text() {
    let e = ExpectedEntry::parse("4: ").expect("valid");
    assert_eq!(e.line(), 4);
    assert_eq!(e.literal(), "4: ");
}

#[test]
fn text_may_itself_contain_colons() {
    let e = ExpectedEntry::parse("7:1: found: a tab at 7:1").expect("valid");
    assert_eq!(e.line(), 7);
    assert_eq!(e.column(), Some(1));
    assert_eq!(e.literal(), "7:1: found: a tab at 7:1");
}

#[test]
fn rejects_entries_outside_the_grammar() {
    for bad in [
        "",
        "no leading number",
        "12",
        "12:",
        "12:x: text",
        "-3: negative",
        "12 : spaced colon",
        "12:9:missing space",
    ] {
        assert!(
            ExpectedEntry::parse(bad).is_err(),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn rejects_numbers_that_overflow_u32() {
    let err = ExpectedEntry::parse("99999999999: text").expect_err("must fail");
    assert!(matches!(err, HarnessError::MalformedExpectation { .. }));
}

#[test]
fn parse_list_preserves_order_and_stops_on_malformed() {
    let entries =
        ExpectedEntry::parse_list(["1: a", "2:3: b", "0: c"]).expect("all valid");
    assert_eq!(
        entries.iter().map(ExpectedEntry::line).collect::<Vec<_>>(),
        vec![1, 2, 0]
    );

    assert!(ExpectedEntry::parse_list(["1: ok", "broken"]).is_err());
}

// ── comparison ───────────────────────────────────────────────────────────

#[test]
fn identical_sequences_match_with_no_mismatches() {
    let expected = ExpectedEntry::parse_list(["3:1: alpha", "5: beta"]).expect("valid");
    let actual = vec![diag(3, Some(1), "alpha"), diag(5, None, "beta")];

    let result = compare(&expected, &actual);
    assert!(result.matched());
    assert!(result.mismatches().is_empty());
}

#[test]
fn empty_against_empty_matches() {
    let result = compare(&[], &[]);
    assert!(result.matched());
}

#[test]
fn content_difference_is_reported_with_both_sides() {
    let expected = ExpectedEntry::parse_list(["3:1: alpha", "5: beta"]).expect("valid");
    let actual = vec![diag(3, Some(1), "alpha"), diag(5, None, "BETA")];

    let result = compare(&expected, &actual);
    assert!(!result.matched());
    assert_eq!(
        result.mismatches(),
        &[Mismatch {
            index: 1,
            expected: Some("5: beta".to_owned()),
            actual: Some("5: BETA".to_owned()),
        }]
    );
}

#[test]
fn comparison_never_stops_at_the_first_difference() {
    let expected = ExpectedEntry::parse_list(["1: a", "2: b", "3: c"]).expect("valid");
    let actual = vec![diag(1, None, "x"), diag(2, None, "b"), diag(3, None, "y")];

    let result = compare(&expected, &actual);
    let indices: Vec<usize> = result.mismatches().iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn extra_trailing_actual_is_one_mismatch_per_index() {
    // Scenario: expected has one fewer entry than actual.
    let expected = ExpectedEntry::parse_list(["1: a", "2: b"]).expect("valid");
    let actual = vec![diag(1, None, "a"), diag(2, None, "b"), diag(9, None, "extra")];

    let result = compare(&expected, &actual);
    assert!(!result.matched());
    assert_eq!(
        result.mismatches(),
        &[Mismatch {
            index: 2,
            expected: None,
            actual: Some("9: extra".to_owned()),
        }]
    );
}

#[test]
fn missing_trailing_actuals_each_get_their_own_mismatch() {
    let expected = ExpectedEntry::parse_list(["1: a", "2: b", "3: c"]).expect("valid");
    let actual = vec![diag(1, None, "a")];

    let result = compare(&expected, &actual);
    assert_eq!(result.mismatches().len(), 2);
    assert_eq!(
        result.mismatches()[0],
        Mismatch {
            index: 1,
            expected: Some("2: b".to_owned()),
            actual: None,
        }
    );
    assert_eq!(result.mismatches()[1].index, 2);
}

#[test]
fn no_normalization_of_whitespace_or_case() {
    let expected = ExpectedEntry::parse_list(["1: two  spaces"]).expect("valid");
    let actual = vec![diag(1, None, "two spaces")];
    assert!(!compare(&expected, &actual).matched());
}

// ── column boundary ──────────────────────────────────────────────────────

#[test]
fn column_omitted_matches_column_absent() {
    let expected = ExpectedEntry::parse_list(["5: text"]).expect("valid");
    let actual = vec![diag(5, None, "text")];
    assert!(compare(&expected, &actual).matched());
}

#[test]
fn column_omitted_does_not_match_column_present() {
    let expected = ExpectedEntry::parse_list(["5: text"]).expect("valid");
    let actual = vec![diag(5, Some(1), "text")];
    assert!(!compare(&expected, &actual).matched());
}

#[test]
fn column_present_requires_exact_numeric_match() {
    let expected = ExpectedEntry::parse_list(["5:4: text"]).expect("valid");

    assert!(compare(&expected, &[diag(5, Some(4), "text")]).matched());
    assert!(!compare(&expected, &[diag(5, Some(5), "text")]).matched());
}

// ── display ──────────────────────────────────────────────────────────────

#[test]
fn mismatch_display_covers_all_shapes() {
    let both = Mismatch {
        index: 0,
        expected: Some("1: a".to_owned()),
        actual: Some("1: b".to_owned()),
    };
    assert!(both.to_string().contains("expected"));
    assert!(both.to_string().contains("got"));

    let missing = Mismatch {
        index: 1,
        expected: Some("2: c".to_owned()),
        actual: None,
    };
    assert!(missing.to_string().contains("got nothing"));

    let extra = Mismatch {
        index: 2,
        expected: None,
        actual: Some("3: d".to_owned()),
    };
    assert!(extra.to_string().contains("unexpected extra"));
}
