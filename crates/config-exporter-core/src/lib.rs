// crates/config-exporter-core/src/lib.rs
// ============================================================================
// Module: Config Exporter Core Library
// Description: Public API surface for the config exporter core.
// Purpose: Expose core types, interfaces, and the export runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Config exporter core provides the deterministic export pipeline: path
//! catalog loading, scoped aggregation of oracle results, quoted YAML
//! rendering, and output resolution. It is oracle-agnostic and integrates
//! with external configuration sources through explicit interfaces rather
//! than embedding process or terminal concerns.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::AutoConfirm;
pub use interfaces::ConfigOracle;
pub use interfaces::ConfirmationGate;
pub use interfaces::OracleError;
pub use runtime::Aggregator;
pub use runtime::ExportError;
pub use runtime::ExportOrchestrator;
pub use runtime::ExportOutcome;
pub use runtime::ExportPhase;
pub use runtime::ExportRequest;
