// crates/config-exporter-core/src/core/catalog.rs
// ============================================================================
// Module: Path Catalog Loader
// Description: Loads configuration-path prefixes from a YAML definition.
// Purpose: Produce the ordered, de-duplicated unit of work for an export run.
// Dependencies: serde, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! The path catalog is a YAML document with a `paths` list of configuration
//! path prefixes. Loading trims entries, discards blanks, de-duplicates while
//! preserving first-occurrence order, and enforces a hard size limit on the
//! input file. A catalog that yields zero usable prefixes is an error: the
//! pipeline must not proceed to query the oracle with nothing to ask for.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a path catalog file, in bytes.
const MAX_CATALOG_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Path Prefix
// ============================================================================

/// Configuration-path prefix selecting a namespace to export.
///
/// # Invariants
/// - Trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Creates a path prefix, rejecting blank input.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Option<Self> {
        let prefix = prefix.into();
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Path catalog loading errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - All variants abort the run before any oracle invocation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file is missing, unreadable, or exceeds the size limit.
    #[error("unable to read path catalog at {path}: {message}")]
    Read {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying read failure description.
        message: String,
    },
    /// The catalog file is not a valid YAML list-of-strings document.
    #[error("path catalog at {path} is malformed: {message}")]
    Parse {
        /// Catalog file path.
        path: PathBuf,
        /// Parser failure description.
        message: String,
    },
    /// The catalog document has no `paths` list.
    #[error("path catalog at {path} has no 'paths' list")]
    MissingPaths {
        /// Catalog file path.
        path: PathBuf,
    },
    /// The catalog yielded zero usable prefixes after filtering.
    #[error("path catalog at {path} contains no usable prefixes")]
    Empty {
        /// Catalog file path.
        path: PathBuf,
    },
}

// ============================================================================
// SECTION: Catalog Document
// ============================================================================

/// Raw catalog document shape accepted from YAML input.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    /// Ordered list of configuration-path prefixes.
    #[serde(default)]
    paths: Option<Vec<String>>,
}

// ============================================================================
// SECTION: Path Catalog
// ============================================================================

/// Ordered, de-duplicated sequence of path prefixes for one export run.
///
/// # Invariants
/// - Contains at least one prefix.
/// - Order matches first occurrence in the catalog file; query order and
///   last-write-wins merging both depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCatalog {
    /// Prefixes in catalog order.
    prefixes: Vec<PathPrefix>,
}

impl PathCatalog {
    /// Loads a path catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, is not a
    /// recognizable list-of-strings document, or yields zero usable prefixes.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = read_catalog_limited(path)?;
        let document: CatalogDocument =
            serde_yaml::from_str(&content).map_err(|err| CatalogError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        let Some(raw_paths) = document.paths else {
            return Err(CatalogError::MissingPaths {
                path: path.to_path_buf(),
            });
        };

        let mut seen = BTreeSet::new();
        let mut prefixes = Vec::new();
        for raw in raw_paths {
            let Some(prefix) = PathPrefix::new(raw) else {
                continue;
            };
            if seen.insert(prefix.as_str().to_string()) {
                prefixes.push(prefix);
            }
        }
        if prefixes.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            prefixes,
        })
    }

    /// Returns the prefixes in catalog order.
    #[must_use]
    pub fn prefixes(&self) -> &[PathPrefix] {
        &self.prefixes
    }

    /// Returns the number of prefixes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns true when the catalog holds no prefixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads the catalog file while enforcing the size limit.
fn read_catalog_limited(path: &Path) -> Result<String, CatalogError> {
    let read_error = |message: String| CatalogError::Read {
        path: path.to_path_buf(),
        message,
    };
    let file = File::open(path).map_err(|err| read_error(err.to_string()))?;
    let limit = u64::try_from(MAX_CATALOG_BYTES.saturating_add(1))
        .map_err(|_| read_error("catalog size limit exceeds u64".to_string()))?;
    let mut buf = Vec::new();
    let mut handle = file.take(limit);
    handle.read_to_end(&mut buf).map_err(|err| read_error(err.to_string()))?;
    if buf.len() > MAX_CATALOG_BYTES {
        return Err(read_error(format!("catalog exceeds size limit ({MAX_CATALOG_BYTES} bytes)")));
    }
    String::from_utf8(buf).map_err(|err| CatalogError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
