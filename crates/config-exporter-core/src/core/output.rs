// crates/config-exporter-core/src/core/output.rs
// ============================================================================
// Module: Output Resolution
// Description: Destination directory and filename resolution plus file writes.
// Purpose: Compute deterministic output targets and write records atomically.
// Dependencies: crate::core::scope, thiserror
// ============================================================================

//! ## Overview
//! The output target identifies where one export run persists its record.
//! Resolution is pure: the directory comes from an override or the fixed
//! subpath under the installation root, and the filename derives from the
//! scope selector. Writes replace the whole file atomically via a temp file
//! and rename, so a failed run never leaves a truncated export behind.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::scope::ScopeSelector;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output subpath under the installation root.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "var/magento-config-exporter";

/// Extension of exported record files.
pub const OUTPUT_EXTENSION: &str = "yaml";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Output target materialization errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - All variants are fatal; no partial output is left behind.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The resolved directory path collides with a non-directory file.
    #[error("output path {path} exists and is not a directory")]
    Conflict {
        /// Colliding path.
        path: PathBuf,
    },
    /// The resolved directory cannot be created.
    #[error("cannot create output directory {path}: {message}")]
    Create {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying failure description.
        message: String,
    },
    /// The export file cannot be written or moved into place.
    #[error("cannot write export file {path}: {message}")]
    Write {
        /// Destination file path.
        path: PathBuf,
        /// Underlying failure description.
        message: String,
    },
}

// ============================================================================
// SECTION: Output Target
// ============================================================================

/// Resolved destination identity for one export run.
///
/// # Invariants
/// - `filename` is `default.yaml` for the default scope, else
///   `<scope>-<scope_code>.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Destination directory.
    directory: PathBuf,
    /// Destination filename.
    filename: String,
}

impl OutputTarget {
    /// Resolves the output target from the scope selector, an optional
    /// override directory, and the installation root.
    ///
    /// The override directory wins unconditionally when supplied.
    #[must_use]
    pub fn resolve(
        selector: &ScopeSelector,
        override_dir: Option<&Path>,
        install_root: &Path,
    ) -> Self {
        let directory = override_dir
            .map_or_else(|| install_root.join(DEFAULT_OUTPUT_SUBDIR), Path::to_path_buf);
        let filename = format!("{}.{OUTPUT_EXTENSION}", selector.file_stem());
        Self {
            directory,
            filename,
        }
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the destination filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the full destination file path.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Ensures the destination directory exists.
    ///
    /// Returns true when the directory had to be created.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] when the path collides with a non-directory
    /// file or the directory cannot be created.
    pub fn prepare_directory(&self) -> Result<bool, OutputError> {
        if self.directory.exists() {
            if !self.directory.is_dir() {
                return Err(OutputError::Conflict {
                    path: self.directory.clone(),
                });
            }
            return Ok(false);
        }
        fs::create_dir_all(&self.directory).map_err(|err| OutputError::Create {
            path: self.directory.clone(),
            message: err.to_string(),
        })?;
        Ok(true)
    }

    /// Writes the rendered record atomically as a whole-file replace.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] when the temp file cannot be written or moved
    /// into place.
    pub fn write_atomic(&self, contents: &str) -> Result<PathBuf, OutputError> {
        let destination = self.path();
        let staging = self.directory.join(format!(".{}.tmp", self.filename));
        fs::write(&staging, contents).map_err(|err| OutputError::Write {
            path: staging.clone(),
            message: err.to_string(),
        })?;
        if let Err(err) = fs::rename(&staging, &destination) {
            let _ = fs::remove_file(&staging);
            return Err(OutputError::Write {
                path: destination,
                message: err.to_string(),
            });
        }
        Ok(destination)
    }
}
