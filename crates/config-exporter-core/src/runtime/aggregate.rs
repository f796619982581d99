// crates/config-exporter-core/src/runtime/aggregate.rs
// ============================================================================
// Module: Result Aggregation
// Description: Merges per-prefix oracle results into one export record.
// Purpose: Enforce prefix containment, deduplication, and stable ordering.
// Dependencies: crate::core::{catalog, record, scope}
// ============================================================================

//! ## Overview
//! The aggregator absorbs per-prefix query results in catalog order. When two
//! prefixes produce the same key, the later result overwrites the earlier one
//! (last-write-wins in catalog order) — overlapping prefixes are a legitimate
//! catalog pattern, so this is documented behavior rather than an accident.
//! Keys that do not start with the queried prefix are discarded, so unrelated
//! configuration never leaks into the record. Values pass through verbatim;
//! the aggregator never reinterprets the oracle's string forms.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::PathPrefix;
use crate::core::record::ConfigEntry;
use crate::core::record::ExportRecord;
use crate::core::scope::ScopeSelector;

// ============================================================================
// SECTION: Aggregator
// ============================================================================

/// Accumulates per-prefix query results into one export record.
///
/// # Invariants
/// - Absorption order is catalog order; later absorptions win key collisions.
/// - The finished record contains only keys prefixed by an absorbed prefix.
#[derive(Debug)]
pub struct Aggregator {
    /// Record under construction.
    record: ExportRecord,
}

impl Aggregator {
    /// Creates an empty aggregator for the given scope selector.
    #[must_use]
    pub fn new(selector: &ScopeSelector) -> Self {
        Self {
            record: ExportRecord::new(selector),
        }
    }

    /// Absorbs one prefix's query results.
    ///
    /// Entries whose key does not start with the queried prefix are dropped.
    pub fn absorb(&mut self, prefix: &PathPrefix, entries: Vec<ConfigEntry>) {
        for entry in entries {
            if !entry.path.starts_with(prefix.as_str()) {
                continue;
            }
            self.record.insert(entry);
        }
    }

    /// Finishes aggregation and returns the export record.
    #[must_use]
    pub fn finish(self) -> ExportRecord {
        self.record
    }
}
