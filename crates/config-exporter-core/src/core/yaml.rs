// crates/config-exporter-core/src/core/yaml.rs
// ============================================================================
// Module: Quoted YAML Serialization
// Description: Deterministic quoted YAML rendering and parsing for records.
// Purpose: Guarantee byte-stable, diff-friendly export files with a round trip.
// Dependencies: crate::core::record, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! Export records are rendered by hand so the byte form is fully determined:
//! every key and scalar is double-quoted and escaped, `scope` and
//! `scope_code` precede `values`, and value keys follow the record's
//! lexicographic map order. Parsing goes through `serde_yaml`, which accepts
//! the rendered form and reconstructs an equivalent record, making the format
//! usable as import input by a future companion tool.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::record::ExportRecord;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Export record parsing errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RecordParseError {
    /// The input is not a valid export record document.
    #[error("export record is malformed: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders an export record as deterministic quoted YAML.
///
/// Re-rendering an unchanged record is byte-identical.
#[must_use]
pub fn render_record(record: &ExportRecord) -> String {
    let mut out = String::new();
    out.push_str("scope: ");
    out.push_str(&quote(record.scope.as_str()));
    out.push('\n');
    out.push_str("scope_code: ");
    out.push_str(&quote(&record.scope_code));
    out.push('\n');
    if record.values.is_empty() {
        out.push_str("values: {}\n");
        return out;
    }
    out.push_str("values:\n");
    for (key, value) in &record.values {
        out.push_str("  ");
        out.push_str(&quote(key));
        out.push_str(": ");
        out.push_str(&quote(value));
        out.push('\n');
    }
    out
}

/// Renders a scalar in YAML double-quoted style.
fn quote(scalar: &str) -> String {
    let mut quoted = String::with_capacity(scalar.len() + 2);
    quoted.push('"');
    for ch in scalar.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if ch.is_control() => {
                quoted.push_str(&format!("\\u{:04X}", u32::from(ch)));
            }
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a serialized export record.
///
/// # Errors
///
/// Returns [`RecordParseError`] when the input is not a valid record document.
pub fn parse_record(text: &str) -> Result<ExportRecord, RecordParseError> {
    serde_yaml::from_str(text).map_err(|err| RecordParseError::Parse(err.to_string()))
}
