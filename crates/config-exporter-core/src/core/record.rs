// crates/config-exporter-core/src/core/record.rs
// ============================================================================
// Module: Export Record
// Description: Aggregated key/value record for one scoped export run.
// Purpose: Provide the canonical in-memory unit that is serialized to disk.
// Dependencies: crate::core::scope, serde
// ============================================================================

//! ## Overview
//! An export record captures one run's aggregated configuration values for a
//! single scope. Values are keyed by fully-qualified configuration path and
//! held in a `BTreeMap`, so lexicographic key ordering is structural rather
//! than enforced at serialization time. The record exists only in memory for
//! the duration of a run; its sole persistent form is the rendered YAML file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::scope::ConfigScope;
use crate::core::scope::ScopeSelector;

// ============================================================================
// SECTION: Config Entry
// ============================================================================

/// A fully-qualified configuration key with its string value.
///
/// # Invariants
/// - `path` is the full slash-delimited configuration key.
/// - `value` is the oracle's verbatim string form; unset values are never
///   represented as entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Fully-qualified configuration key.
    pub path: String,
    /// Verbatim string value.
    pub value: String,
}

impl ConfigEntry {
    /// Creates a configuration entry.
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Export Record
// ============================================================================

/// Aggregated export record for one scoped run.
///
/// # Invariants
/// - `scope_code` is the empty string exactly when `scope` is default, so the
///   serialized schema stays uniform across scopes.
/// - `values` holds only keys prefixed by a requested path prefix.
/// - Key iteration order is lexicographic (`BTreeMap`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Scope the record was exported from.
    pub scope: ConfigScope,
    /// Scope code, or the empty string for the default scope.
    pub scope_code: String,
    /// Exported configuration values keyed by full configuration path.
    pub values: BTreeMap<String, String>,
}

impl ExportRecord {
    /// Creates an empty record for the given scope selector.
    #[must_use]
    pub fn new(selector: &ScopeSelector) -> Self {
        Self {
            scope: selector.scope(),
            scope_code: selector.scope_code_or_empty().to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Inserts an entry, overwriting any earlier value for the same key.
    pub fn insert(&mut self, entry: ConfigEntry) {
        self.values.insert(entry.path, entry.value);
    }

    /// Returns the number of exported values.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}
