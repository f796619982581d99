// crates/config-exporter-core/tests/record_yaml.rs
// ============================================================================
// Module: Record Serialization Tests
// Description: Exercises deterministic quoted YAML rendering and parsing.
// Purpose: Ensure export files are byte-stable, fully quoted, and readable.
// Dependencies: config-exporter-core.
// ============================================================================

//! ## Overview
//! Validates export record serialization:
//! - Every key and scalar is double-quoted, with keys in lexicographic order.
//! - Empty records render a flow-style empty `values` mapping.
//! - Rendered documents parse back into equivalent records.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use config_exporter_core::ConfigEntry;
use config_exporter_core::ConfigScope;
use config_exporter_core::ExportRecord;
use config_exporter_core::ScopeSelector;
use config_exporter_core::parse_record;
use config_exporter_core::render_record;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a record for the given scope with the supplied entries.
fn record_with(
    scope: ConfigScope,
    scope_code: Option<&str>,
    entries: &[(&str, &str)],
) -> ExportRecord {
    let selector = ScopeSelector::new(scope, scope_code.map(str::to_string)).unwrap();
    let mut record = ExportRecord::new(&selector);
    for (path, value) in entries {
        record.insert(ConfigEntry::new(*path, *value));
    }
    record
}

// ============================================================================
// SECTION: Rendering Tests
// ============================================================================

/// Confirms the exact byte form of a default-scope record.
#[test]
fn renders_default_scope_record() {
    let record = record_with(ConfigScope::Default, None, &[
        ("web/secure/base_url", "https://example.test/"),
        ("general/store_information/name", "Example"),
    ]);
    let rendered = render_record(&record);
    let expected = concat!(
        "scope: \"default\"\n",
        "scope_code: \"\"\n",
        "values:\n",
        "  \"general/store_information/name\": \"Example\"\n",
        "  \"web/secure/base_url\": \"https://example.test/\"\n",
    );
    assert_eq!(rendered, expected);
}

/// Confirms the exact byte form of a store-scope record.
#[test]
fn renders_store_scope_record() {
    let record = record_with(ConfigScope::Stores, Some("english"), &[(
        "general/locale/code",
        "en_US",
    )]);
    let rendered = render_record(&record);
    let expected = concat!(
        "scope: \"stores\"\n",
        "scope_code: \"english\"\n",
        "values:\n",
        "  \"general/locale/code\": \"en_US\"\n",
    );
    assert_eq!(rendered, expected);
}

/// Confirms an empty record renders a flow-style empty mapping.
#[test]
fn renders_empty_values_as_flow_mapping() {
    let record = record_with(ConfigScope::Websites, Some("base"), &[]);
    let rendered = render_record(&record);
    let expected = concat!("scope: \"websites\"\n", "scope_code: \"base\"\n", "values: {}\n");
    assert_eq!(rendered, expected);
}

/// Confirms value keys always render in lexicographic order.
#[test]
fn renders_keys_in_lexicographic_order() {
    let record = record_with(ConfigScope::Default, None, &[
        ("web/b", "2"),
        ("general/a", "1"),
        ("web/a", "3"),
    ]);
    let rendered = render_record(&record);
    let general = rendered.find("\"general/a\"").unwrap();
    let web_a = rendered.find("\"web/a\"").unwrap();
    let web_b = rendered.find("\"web/b\"").unwrap();
    assert!(general < web_a);
    assert!(web_a < web_b);
}

/// Confirms re-rendering an unchanged record is byte-identical.
#[test]
fn rendering_is_deterministic() {
    let record = record_with(ConfigScope::Default, None, &[
        ("general/a", "1"),
        ("web/b", "2"),
    ]);
    assert_eq!(render_record(&record), render_record(&record));
}

/// Confirms special characters are escaped inside double quotes.
#[test]
fn escapes_special_characters() {
    let record = record_with(ConfigScope::Default, None, &[(
        "design/head/includes",
        "line one\nsaid \"two\"\tand \\ done",
    )]);
    let rendered = render_record(&record);
    assert!(rendered.contains(r#""line one\nsaid \"two\"\tand \\ done""#), "got: {rendered}");
}

// ============================================================================
// SECTION: Parsing Tests
// ============================================================================

/// Confirms a rendered record parses back to an equivalent record.
#[test]
fn rendered_record_parses_back() {
    let record = record_with(ConfigScope::Stores, Some("english"), &[
        ("general/locale/code", "en_US"),
        ("design/head/includes", "a\nb"),
    ]);
    let parsed = parse_record(&render_record(&record)).unwrap();
    assert_eq!(parsed, record);
}

/// Confirms malformed documents are rejected.
#[test]
fn malformed_document_is_rejected() {
    assert!(parse_record("scope: [oops\n").is_err());
}

/// Confirms documents with an unknown scope label are rejected.
#[test]
fn unknown_scope_label_is_rejected() {
    let text = "scope: \"galaxies\"\nscope_code: \"\"\nvalues: {}\n";
    assert!(parse_record(text).is_err());
}
