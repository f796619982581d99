// crates/config-exporter-core/src/runtime/mod.rs
// ============================================================================
// Module: Config Exporter Runtime
// Description: Aggregation and orchestration for export runs.
// Purpose: Provide the sequential pipeline that turns prefixes into a file.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime sequences one export run: load the catalog, check the oracle,
//! query each prefix in catalog order, aggregate, render, and write behind
//! the confirmation gate. Execution is single-threaded and synchronous; the
//! last-write-wins merge contract depends on the sequential query order.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod aggregate;
pub mod exporter;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use aggregate::Aggregator;
pub use exporter::ExportError;
pub use exporter::ExportOrchestrator;
pub use exporter::ExportOutcome;
pub use exporter::ExportPhase;
pub use exporter::ExportRequest;
