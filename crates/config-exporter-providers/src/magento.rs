// crates/config-exporter-providers/src/magento.rs
// ============================================================================
// Module: Magento CLI Oracle
// Description: Config oracle backed by the Magento `config:show` command.
// Purpose: Resolve scoped configuration values via a blocking subprocess.
// Dependencies: config-exporter-core, serde
// ============================================================================

//! ## Overview
//! The Magento oracle spawns `<install_root>/bin/magento config:show` once
//! per path prefix and extracts `key - value` lines from stdout. Lines that
//! do not parse are skipped, keys outside the queried prefix are dropped, and
//! unset values are omitted rather than recorded as empty. The oracle is a
//! local, trusted component under the operator's control; invocations block
//! without a timeout.
//!
//! Failure mapping for non-zero exits relies on Magento's own messages: a
//! nonexistent configuration path during a prefix query is an empty result,
//! a nonexistent store or website is an invalid-scope rejection surfaced
//! verbatim, and anything else is an invocation failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use config_exporter_core::ConfigEntry;
use config_exporter_core::ConfigOracle;
use config_exporter_core::OracleError;
use config_exporter_core::PathPrefix;
use config_exporter_core::ScopeSelector;
use serde::Deserialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Oracle binary location under the installation root.
const DEFAULT_BINARY_SUBPATH: &str = "bin/magento";

/// Subcommand that dumps configuration values.
const CONFIG_SHOW: &str = "config:show";

/// Separator between key and value in the oracle's tabular reply.
const ENTRY_SEPARATOR: &str = " - ";

/// Stderr marker for a nonexistent configuration path.
const PATH_MISSING_MARKER: &str = "path doesn't exist";

/// Stderr marker for a nonexistent scope or scope code.
const SCOPE_MISSING_MARKER: &str = "doesn't exist";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the Magento CLI oracle.
///
/// # Invariants
/// - `binary` overrides the default `bin/magento` location when present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MagentoCliConfig {
    /// Magento installation root.
    pub install_root: PathBuf,
    /// Optional override of the oracle binary path.
    pub binary: Option<PathBuf>,
}

impl MagentoCliConfig {
    /// Creates a configuration for the given installation root.
    #[must_use]
    pub const fn new(install_root: PathBuf) -> Self {
        Self {
            install_root,
            binary: None,
        }
    }
}

// ============================================================================
// SECTION: Oracle Implementation
// ============================================================================

/// Config oracle backed by the Magento CLI.
pub struct MagentoCliOracle {
    /// Oracle configuration.
    config: MagentoCliConfig,
}

impl MagentoCliOracle {
    /// Creates a new Magento CLI oracle with the given configuration.
    #[must_use]
    pub const fn new(config: MagentoCliConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the resolved oracle binary path.
    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        self.config
            .binary
            .clone()
            .unwrap_or_else(|| self.config.install_root.join(DEFAULT_BINARY_SUBPATH))
    }

    /// Renders the command line for one invocation, for diagnostics.
    #[must_use]
    pub fn command_line(&self, selector: &ScopeSelector, prefix: Option<&PathPrefix>) -> String {
        let mut rendered = format!(
            "{} {CONFIG_SHOW} --scope={}",
            self.binary_path().display(),
            selector.scope()
        );
        if let Some(code) = selector.scope_code() {
            rendered.push_str(&format!(" --scope-code={code}"));
        }
        if let Some(prefix) = prefix {
            rendered.push_str(&format!(" {prefix}"));
        }
        rendered
    }

    /// Invokes `config:show` for the selector and optional prefix.
    fn invoke(
        &self,
        selector: &ScopeSelector,
        prefix: Option<&PathPrefix>,
    ) -> Result<Output, OracleError> {
        let mut command = Command::new(self.binary_path());
        command
            .arg(CONFIG_SHOW)
            .arg(format!("--scope={}", selector.scope()))
            .current_dir(&self.config.install_root);
        if let Some(code) = selector.scope_code() {
            command.arg(format!("--scope-code={code}"));
        }
        if let Some(prefix) = prefix {
            command.arg(prefix.as_str());
        }
        command.output().map_err(|err| OracleError::Invocation {
            context: self.command_line(selector, prefix),
            message: err.to_string(),
        })
    }
}

impl ConfigOracle for MagentoCliOracle {
    fn ensure_available(&self) -> Result<(), OracleError> {
        let binary = self.binary_path();
        if binary.is_file() {
            return Ok(());
        }
        Err(OracleError::Unavailable(format!("no Magento CLI found at {}", binary.display())))
    }

    fn validate_scope(&self, selector: &ScopeSelector) -> Result<(), OracleError> {
        let output = self.invoke(selector, None)?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains(SCOPE_MISSING_MARKER) {
            return Err(OracleError::InvalidScope {
                message: stderr,
            });
        }
        Err(OracleError::Invocation {
            context: self.command_line(selector, None),
            message: stderr,
        })
    }

    fn query(
        &self,
        prefix: &PathPrefix,
        selector: &ScopeSelector,
    ) -> Result<Vec<ConfigEntry>, OracleError> {
        let output = self.invoke(selector, Some(prefix))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains(PATH_MISSING_MARKER) {
                return Ok(Vec::new());
            }
            if stderr.contains(SCOPE_MISSING_MARKER) {
                return Err(OracleError::InvalidScope {
                    message: stderr,
                });
            }
            return Err(OracleError::Invocation {
                context: self.command_line(selector, Some(prefix)),
                message: stderr,
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_entries(&stdout, prefix))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Extracts configuration entries under the queried prefix from a reply.
fn parse_entries(stdout: &str, prefix: &PathPrefix) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();
    for line in stdout.lines() {
        let Some((key, value)) = line.split_once(ENTRY_SEPARATOR) else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        if !key.starts_with(prefix.as_str()) {
            continue;
        }
        entries.push(ConfigEntry::new(key, value));
    }
    entries
}
