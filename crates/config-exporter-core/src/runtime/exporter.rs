// crates/config-exporter-core/src/runtime/exporter.rs
// ============================================================================
// Module: Export Orchestrator
// Description: Sequences one export run through its state machine.
// Purpose: Define the overall success/failure contract for an export.
// Dependencies: crate::{core, interfaces, runtime::aggregate}
// ============================================================================

//! ## Overview
//! The orchestrator owns the export record for the duration of a run and
//! drives the phases `Idle → CatalogLoaded → Queried → Aggregated →
//! Serialized → (ConfirmPending | Written) → Done`, with `Failed` reachable
//! from any non-terminal phase. Declining confirmation is an intentional
//! abort, not an error: the run finishes in `Done` without writing. Any
//! component failure halts the run; partial output is never written because
//! the target file is replaced atomically as a whole record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::core::catalog::CatalogError;
use crate::core::catalog::PathCatalog;
use crate::core::output::OutputError;
use crate::core::output::OutputTarget;
use crate::core::scope::ScopeSelector;
use crate::core::yaml::render_record;
use crate::interfaces::ConfigOracle;
use crate::interfaces::ConfirmationGate;
use crate::interfaces::OracleError;
use crate::runtime::aggregate::Aggregator;

// ============================================================================
// SECTION: Phases
// ============================================================================

/// Export run phase.
///
/// # Invariants
/// - `Done` and `Failed` are terminal.
/// - `ConfirmPending` occurs only with an interactive confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    /// Run has not started.
    Idle,
    /// Path catalog was loaded and validated.
    CatalogLoaded,
    /// All prefixes were queried against the oracle.
    Queried,
    /// Results were merged into the export record.
    Aggregated,
    /// The record was rendered to its serialized form.
    Serialized,
    /// Awaiting an interactive confirmation decision.
    ConfirmPending,
    /// The record was written to the output target.
    Written,
    /// Run finished, with or without a write.
    Done,
    /// Run aborted due to a component failure.
    Failed,
}

// ============================================================================
// SECTION: Request and Outcome
// ============================================================================

/// Inputs for one export run.
///
/// The installation root is threaded through explicitly; the pipeline keeps
/// no process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Path catalog file to load.
    pub catalog_path: PathBuf,
    /// Scope selector governing the run.
    pub selector: ScopeSelector,
    /// Installation root of the source application.
    pub install_root: PathBuf,
    /// Optional output directory override.
    pub output_dir: Option<PathBuf>,
}

/// Outcome of a completed export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The record was written to disk.
    Written {
        /// Destination file path.
        path: PathBuf,
        /// Number of exported values.
        value_count: usize,
        /// True when the output directory had to be created.
        created_directory: bool,
    },
    /// The operator declined confirmation; nothing was written.
    Declined,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Export run errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant aborts the run with no partial write.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The path catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The oracle was unavailable, rejected the scope, or failed to answer.
    #[error(transparent)]
    Oracle(#[from] OracleError),
    /// The output target could not be materialized or written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

// ============================================================================
// SECTION: Orchestrator
// ============================================================================

/// Sequences one export run over an oracle and a confirmation gate.
///
/// # Invariants
/// - Oracle queries are issued sequentially, one per prefix, in catalog
///   order; the last-write-wins merge contract depends on this.
/// - The orchestrator exclusively owns the export record during a run.
pub struct ExportOrchestrator<'a> {
    /// Configuration oracle queried per prefix.
    oracle: &'a dyn ConfigOracle,
    /// Gate consulted before the destructive write.
    gate: &'a dyn ConfirmationGate,
    /// Current run phase.
    phase: ExportPhase,
}

impl<'a> ExportOrchestrator<'a> {
    /// Creates an orchestrator over the given oracle and confirmation gate.
    #[must_use]
    pub const fn new(oracle: &'a dyn ConfigOracle, gate: &'a dyn ConfirmationGate) -> Self {
        Self {
            oracle,
            gate,
            phase: ExportPhase::Idle,
        }
    }

    /// Returns the current run phase.
    #[must_use]
    pub const fn phase(&self) -> ExportPhase {
        self.phase
    }

    /// Executes one export run.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when any pipeline component fails; the run
    /// transitions to [`ExportPhase::Failed`] and nothing is written.
    pub fn run(&mut self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        match self.execute(request) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                self.phase = ExportPhase::Failed;
                Err(err)
            }
        }
    }

    /// Drives the run through its phases.
    fn execute(&mut self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        let catalog = PathCatalog::load(&request.catalog_path)?;
        self.phase = ExportPhase::CatalogLoaded;

        self.oracle.ensure_available()?;
        self.oracle.validate_scope(&request.selector)?;

        let mut aggregator = Aggregator::new(&request.selector);
        for prefix in catalog.prefixes() {
            let entries = self.oracle.query(prefix, &request.selector)?;
            aggregator.absorb(prefix, entries);
        }
        self.phase = ExportPhase::Queried;

        let record = aggregator.finish();
        self.phase = ExportPhase::Aggregated;

        let rendered = render_record(&record);
        self.phase = ExportPhase::Serialized;

        let target = OutputTarget::resolve(
            &request.selector,
            request.output_dir.as_deref(),
            &request.install_root,
        );
        if self.gate.interactive() {
            self.phase = ExportPhase::ConfirmPending;
        }
        if !self.gate.confirm(&target) {
            self.phase = ExportPhase::Done;
            return Ok(ExportOutcome::Declined);
        }

        let created_directory = target.prepare_directory()?;
        let path = target.write_atomic(&rendered)?;
        self.phase = ExportPhase::Written;

        let outcome = ExportOutcome::Written {
            path,
            value_count: record.value_count(),
            created_directory,
        };
        self.phase = ExportPhase::Done;
        Ok(outcome)
    }
}
