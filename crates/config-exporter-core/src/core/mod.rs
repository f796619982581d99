// crates/config-exporter-core/src/core/mod.rs
// ============================================================================
// Module: Config Exporter Core Types
// Description: Canonical data model for scoped configuration exports.
// Purpose: Provide stable, serializable types for export runs and records.
// Dependencies: serde, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! Core types define the scoped export data model: path prefixes, scope
//! selectors, configuration entries, export records, and output targets.
//! These types are the canonical source of truth for the serialized export
//! format and for any future companion importer.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod output;
pub mod record;
pub mod scope;
pub mod yaml;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::PathCatalog;
pub use catalog::PathPrefix;
pub use output::OutputError;
pub use output::OutputTarget;
pub use record::ConfigEntry;
pub use record::ExportRecord;
pub use scope::ConfigScope;
pub use scope::ScopeError;
pub use scope::ScopeSelector;
pub use yaml::RecordParseError;
pub use yaml::parse_record;
pub use yaml::render_record;
