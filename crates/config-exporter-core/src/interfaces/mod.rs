// crates/config-exporter-core/src/interfaces/mod.rs
// ============================================================================
// Module: Config Exporter Interfaces
// Description: Oracle and confirmation contracts used by the export runtime.
// Purpose: Define the seams between the pipeline and its collaborators.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the export pipeline talks to the external
//! configuration oracle and to the confirmation gate without embedding
//! process or terminal details. Implementations must be deterministic for a
//! given source state; the runtime never retries, because every failure mode
//! is either misconfiguration or invalid input rather than transient.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::catalog::PathPrefix;
use crate::core::output::OutputTarget;
use crate::core::record::ConfigEntry;
use crate::core::scope::ScopeSelector;

// ============================================================================
// SECTION: Oracle
// ============================================================================

/// Configuration oracle errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - All variants are fatal for the run; none are retried.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle cannot be invoked at all.
    #[error("configuration oracle unavailable: {0}")]
    Unavailable(String),
    /// The oracle rejected the requested scope or scope code.
    #[error("invalid scope: {message}")]
    InvalidScope {
        /// Verbatim oracle rejection message.
        message: String,
    },
    /// An oracle invocation failed for reasons other than scope validity.
    #[error("oracle invocation failed ({context}): {message}")]
    Invocation {
        /// Invocation context, such as the command line or queried prefix.
        context: String,
        /// Underlying failure description.
        message: String,
    },
}

/// Read-only configuration oracle queried once per path prefix.
///
/// The oracle has no side effects on the source system. Queries are never
/// batched across prefixes, since the oracle's key space is prefix-scoped and
/// batching would lose attribution.
pub trait ConfigOracle {
    /// Verifies that the oracle can be invoked at all.
    ///
    /// Checked once up front, before any prefix is queried.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Unavailable`] when the oracle is missing or
    /// malformed.
    fn ensure_available(&self) -> Result<(), OracleError>;

    /// Verifies that the requested scope exists on the source system.
    ///
    /// Scope validity is run-global, so it is checked once rather than
    /// surfaced per prefix.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidScope`] with the oracle's verbatim
    /// message when the scope or scope code does not exist.
    fn validate_scope(&self, selector: &ScopeSelector) -> Result<(), OracleError>;

    /// Queries all configuration entries under one path prefix.
    ///
    /// A prefix that yields no entries is an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] when the invocation fails or the oracle
    /// rejects the scope.
    fn query(
        &self,
        prefix: &PathPrefix,
        selector: &ScopeSelector,
    ) -> Result<Vec<ConfigEntry>, OracleError>;
}

// ============================================================================
// SECTION: Confirmation Gate
// ============================================================================

/// Gate deciding whether the resolved target may be written.
///
/// The gate is the single suspension point in the export state machine: a
/// yes/no decision before the destructive write.
pub trait ConfirmationGate {
    /// Returns true when confirmation involves interactive input.
    fn interactive(&self) -> bool {
        false
    }

    /// Decides whether the export may be written to the target.
    fn confirm(&self, target: &OutputTarget) -> bool;
}

/// Confirmation gate that always approves, for non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _target: &OutputTarget) -> bool {
        true
    }
}
