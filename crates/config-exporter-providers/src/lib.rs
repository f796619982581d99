// crates/config-exporter-providers/src/lib.rs
// ============================================================================
// Module: Config Exporter Providers
// Description: Oracle adapters backed by external configuration readers.
// Purpose: Provide the Magento CLI oracle behind the core ConfigOracle seam.
// Dependencies: config-exporter-core, serde
// ============================================================================

//! ## Overview
//! This crate ships the Magento CLI oracle adapter: a blocking subprocess
//! boundary around `bin/magento config:show` that parses the tabular reply
//! into configuration entries. The adapter is read-only with respect to the
//! source system and deterministic for a given installation state; swapping
//! it for a mock in tests only requires implementing the core trait.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod magento;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use magento::MagentoCliConfig;
pub use magento::MagentoCliOracle;

#[cfg(test)]
mod tests;
