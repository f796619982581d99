// crates/config-exporter-core/tests/output_target.rs
// ============================================================================
// Module: Output Target Tests
// Description: Exercises destination resolution and atomic file writes.
// Purpose: Ensure deterministic targets and whole-file replacement semantics.
// Dependencies: config-exporter-core, tempfile.
// ============================================================================

//! ## Overview
//! Validates output target behavior:
//! - The override directory wins; otherwise the fixed subpath under the
//!   installation root is used.
//! - Filenames derive from the scope selector.
//! - Directory preparation reports creation and rejects conflicts.
//! - Writes replace the destination file as a whole.

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

use std::fs;
use std::path::Path;

use config_exporter_core::ConfigScope;
use config_exporter_core::OutputError;
use config_exporter_core::OutputTarget;
use config_exporter_core::ScopeSelector;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a selector, panicking on invalid pairings.
fn selector(scope: ConfigScope, code: Option<&str>) -> ScopeSelector {
    ScopeSelector::new(scope, code.map(str::to_string)).unwrap()
}

// ============================================================================
// SECTION: Resolution Tests
// ============================================================================

/// Confirms the default directory sits under the installation root.
#[test]
fn default_directory_is_under_install_root() {
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, None, Path::new("/srv/magento"));
    assert_eq!(target.directory(), Path::new("/srv/magento/var/magento-config-exporter"));
    assert_eq!(target.filename(), "default.yaml");
    assert_eq!(
        target.path(),
        Path::new("/srv/magento/var/magento-config-exporter/default.yaml")
    );
}

/// Confirms the override directory wins unconditionally.
#[test]
fn override_directory_wins() {
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, Some(Path::new("/tmp/out")), Path::new("/srv/magento"));
    assert_eq!(target.directory(), Path::new("/tmp/out"));
    assert_eq!(target.path(), Path::new("/tmp/out/default.yaml"));
}

/// Confirms scoped filenames combine scope and code.
#[test]
fn scoped_filenames_combine_scope_and_code() {
    let stores = selector(ConfigScope::Stores, Some("english"));
    let websites = selector(ConfigScope::Websites, Some("base"));
    let root = Path::new("/srv/magento");
    assert_eq!(OutputTarget::resolve(&stores, None, root).filename(), "stores-english.yaml");
    assert_eq!(OutputTarget::resolve(&websites, None, root).filename(), "websites-base.yaml");
}

// ============================================================================
// SECTION: Directory Preparation Tests
// ============================================================================

/// Confirms a missing directory is created and reported.
#[test]
fn missing_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, None, dir.path());
    assert!(target.prepare_directory().unwrap());
    assert!(target.directory().is_dir());
    assert!(!target.prepare_directory().unwrap());
}

/// Confirms a non-directory collision is rejected.
#[test]
fn non_directory_collision_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, Some(&blocker), dir.path());
    let err = target.prepare_directory().unwrap_err();
    assert!(matches!(err, OutputError::Conflict { .. }), "unexpected error: {err}");
}

// ============================================================================
// SECTION: Write Tests
// ============================================================================

/// Confirms the write lands at the destination with the exact contents.
#[test]
fn write_lands_with_exact_contents() {
    let dir = tempfile::tempdir().unwrap();
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, Some(dir.path()), dir.path());
    let path = target.write_atomic("scope: \"default\"\n").unwrap();
    assert_eq!(path, target.path());
    assert_eq!(fs::read_to_string(&path).unwrap(), "scope: \"default\"\n");
}

/// Confirms an existing file is replaced as a whole.
#[test]
fn existing_file_is_replaced_whole() {
    let dir = tempfile::tempdir().unwrap();
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, Some(dir.path()), dir.path());
    target.write_atomic("old contents that are much longer than the new ones\n").unwrap();
    target.write_atomic("new\n").unwrap();
    assert_eq!(fs::read_to_string(target.path()).unwrap(), "new\n");
}

/// Confirms no staging file is left behind after a successful write.
#[test]
fn staging_file_is_not_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let sel = selector(ConfigScope::Default, None);
    let target = OutputTarget::resolve(&sel, Some(dir.path()), dir.path());
    target.write_atomic("contents\n").unwrap();
    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["default.yaml".to_string()]);
}
