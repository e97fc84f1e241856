#![allow(clippy::expect_used)]

use super::*;

const IMPORTS_INPUT: &str = "\
package com.example.app;

import java.io.File;
import static java.io.File.createTempFile;
import static java.lang.Math.PI;
import static java.lang.Math.abs;
import static java.util.Collections.emptyList;
import static org.junit.Assert.*;

class InputAvoidStaticImport {
}
";

fn source(text: &str) -> SourceText {
    SourceText::new("InputAvoidStaticImport.java", text)
}

fn names(findings: &[Finding]) -> Vec<&str> {
    findings
        .iter()
        .map(|f| f.message_args[0].as_str())
        .collect()
}

// ── avoid-static-import ──────────────────────────────────────────────────

#[test]
fn flags_member_and_wildcard_static_imports_in_line_order() {
    let check = AvoidStaticImport::new();
    let findings = check.check(&source(IMPORTS_INPUT)).expect("checks");

    assert_eq!(
        names(&findings),
        vec![
            "java.io.File.createTempFile",
            "java.lang.Math.PI",
            "java.lang.Math.abs",
            "java.util.Collections.emptyList",
            "org.junit.Assert.*",
        ]
    );
    assert_eq!(
        findings.iter().map(|f| f.line).collect::<Vec<_>>(),
        vec![4, 5, 6, 7, 8]
    );
    // "import static " is 14 bytes; names start at column 15 on unindented lines.
    assert!(findings.iter().all(|f| f.column == Some(15)));
}

#[test]
fn ignores_plain_imports_and_non_import_lines() {
    let check = AvoidStaticImport::new();
    let input = source("import java.io.File;\nclass A {}\n// import static x.y;\n");
    // The comment line still parses as a non-import because of the leading
    // slashes; only exact statements are flagged.
    let findings = check.check(&input).expect("checks");
    assert!(findings.is_empty());
}

#[test]
fn excludes_drop_exact_names() {
    let mut check = AvoidStaticImport::new();
    let mut attrs = BTreeMap::new();
    attrs.insert(
        "excludes".to_owned(),
        "java.lang.Math.PI, java.util.Collections.emptyList".to_owned(),
    );
    check.configure(&attrs).expect("configures");

    let findings = check.check(&source(IMPORTS_INPUT)).expect("checks");
    assert_eq!(
        names(&findings),
        vec![
            "java.io.File.createTempFile",
            "java.lang.Math.abs",
            "org.junit.Assert.*",
        ]
    );
}

#[test]
fn wildcard_exclude_covers_members_and_the_wildcard_itself() {
    let mut check = AvoidStaticImport::new();
    let mut attrs = BTreeMap::new();
    attrs.insert(
        "excludes".to_owned(),
        "java.lang.Math.*, org.junit.Assert.*".to_owned(),
    );
    check.configure(&attrs).expect("configures");

    let findings = check.check(&source(IMPORTS_INPUT)).expect("checks");
    assert_eq!(
        names(&findings),
        vec![
            "java.io.File.createTempFile",
            "java.util.Collections.emptyList",
        ]
    );
}

#[test]
fn wildcard_exclude_does_not_cover_lookalike_prefixes() {
    let mut check = AvoidStaticImport::new();
    let mut attrs = BTreeMap::new();
    attrs.insert("excludes".to_owned(), "java.lang.Math.*".to_owned());
    check.configure(&attrs).expect("configures");

    let input = source("import static java.lang.MathUtils.clamp;\n");
    let findings = check.check(&input).expect("checks");
    assert_eq!(names(&findings), vec!["java.lang.MathUtils.clamp"]);
}

#[test]
fn unknown_attribute_is_rejected_at_configure_time() {
    let mut check = AvoidStaticImport::new();
    let mut attrs = BTreeMap::new();
    attrs.insert("exclude".to_owned(), "typo".to_owned());

    let err = check.configure(&attrs).expect_err("must reject");
    assert_eq!(
        err,
        EvalError::UnknownAttribute {
            rule: "avoid-static-import".to_owned(),
            name: "exclude".to_owned(),
        }
    );
}

#[test]
fn indented_import_reports_the_shifted_column() {
    let check = AvoidStaticImport::new();
    let input = source("    import static a.B.c;\n");
    let findings = check.check(&input).expect("checks");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, Some(19));
    assert_eq!(names(&findings), vec!["a.B.c"]);
}

#[test]
fn import_staticfoo_is_not_a_static_import() {
    let check = AvoidStaticImport::new();
    let input = source("import staticfoo.Bar;\n");
    assert!(check.check(&input).expect("checks").is_empty());
}

// ── file-tab-character ───────────────────────────────────────────────────

#[test]
fn reports_first_tab_per_line() {
    let check = FileTabCharacter;
    let input = SourceText::new("Input.java", "none\n\tleading\nmid\tdle\t\n");
    let findings = check.check(&input).expect("checks");

    assert_eq!(
        findings
            .iter()
            .map(|f| (f.line, f.column))
            .collect::<Vec<_>>(),
        vec![(2, Some(1)), (3, Some(4))]
    );
    assert!(findings.iter().all(|f| f.message_key == "file.containsTab"));
}

#[test]
fn tab_check_recognizes_no_attributes() {
    let mut check = FileTabCharacter;
    let mut attrs = BTreeMap::new();
    attrs.insert("eachLine".to_owned(), "true".to_owned());
    assert!(matches!(
        check.configure(&attrs),
        Err(EvalError::UnknownAttribute { .. })
    ));
}

// ── wiring ───────────────────────────────────────────────────────────────

#[test]
fn reference_registry_contains_both_checks() {
    let registry = reference_registry();
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["avoid-static-import", "file-tab-character"]
    );
}

#[test]
fn reference_catalog_resolves_both_templates() {
    let catalog = reference_catalog();
    let en = Locale::try_from("en").expect("valid tag");

    let import_text = catalog
        .resolve(
            CHECKS_BUNDLE,
            "import.avoidStatic",
            &["java.lang.Math.PI".to_owned()],
            &en,
        )
        .expect("resolves");
    assert_eq!(
        import_text,
        "Using a static member import should be avoided - java.lang.Math.PI."
    );

    let tab_text = catalog
        .resolve(CHECKS_BUNDLE, "file.containsTab", &[], &en)
        .expect("resolves");
    assert_eq!(tab_text, "Line contains a tab character.");
}

#[test]
fn german_locale_uses_the_language_override() {
    let catalog = reference_catalog();
    let de_at = Locale::try_from("de-AT").expect("valid tag");

    let text = catalog
        .resolve(CHECKS_BUNDLE, "file.containsTab", &[], &de_at)
        .expect("resolves");
    assert_eq!(text, "Zeile enthält ein Tabulatorzeichen.");
}
