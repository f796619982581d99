// crates/config-exporter-core/src/core/scope.rs
// ============================================================================
// Module: Scope Selection
// Description: Configuration scopes and validated scope selectors.
// Purpose: Provide strongly typed scope handling with stable wire forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A scope selector pairs a configuration scope with an optional scope code.
//! Exactly one selector governs a single export run. Construction enforces
//! the pairing rules up front so downstream components never see a selector
//! with a missing or spurious code.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Scopes
// ============================================================================

/// Configuration scope addressed by an export run.
///
/// # Invariants
/// - Variants are stable for serialization and filename derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigScope {
    /// Global default scope.
    Default,
    /// Per-store scope; requires a store code.
    Stores,
    /// Per-website scope; requires a website code.
    Websites,
}

impl ConfigScope {
    /// Returns the canonical scope label used on the wire and in filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Stores => "stores",
            Self::Websites => "websites",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Scope selector construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// A non-default scope was requested without a scope code.
    #[error("scope {scope} requires a scope code")]
    MissingCode {
        /// Scope that was requested.
        scope: ConfigScope,
    },
    /// A scope code was supplied together with the default scope.
    #[error("the default scope does not take a scope code (got {code})")]
    UnexpectedCode {
        /// Scope code that was supplied.
        code: String,
    },
    /// The supplied scope code was blank after trimming.
    #[error("scope code must not be blank")]
    BlankCode,
}

// ============================================================================
// SECTION: Scope Selector
// ============================================================================

/// Validated scope selector governing a single export run.
///
/// # Invariants
/// - `scope_code` is present exactly when `scope` is not [`ConfigScope::Default`].
/// - `scope_code` is trimmed and non-empty when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSelector {
    /// Selected configuration scope.
    scope: ConfigScope,
    /// Scope code for non-default scopes.
    scope_code: Option<String>,
}

impl ScopeSelector {
    /// Constructs a validated scope selector.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] when the scope/code pairing rules are violated.
    pub fn new(scope: ConfigScope, scope_code: Option<String>) -> Result<Self, ScopeError> {
        let trimmed = match scope_code {
            Some(code) => {
                let code = code.trim().to_string();
                if code.is_empty() {
                    return Err(ScopeError::BlankCode);
                }
                Some(code)
            }
            None => None,
        };
        match (scope, trimmed) {
            (ConfigScope::Default, Some(code)) => Err(ScopeError::UnexpectedCode {
                code,
            }),
            (ConfigScope::Default, None) => Ok(Self {
                scope,
                scope_code: None,
            }),
            (_, None) => Err(ScopeError::MissingCode {
                scope,
            }),
            (_, Some(code)) => Ok(Self {
                scope,
                scope_code: Some(code),
            }),
        }
    }

    /// Returns the selected scope.
    #[must_use]
    pub const fn scope(&self) -> ConfigScope {
        self.scope
    }

    /// Returns the scope code, if any.
    #[must_use]
    pub fn scope_code(&self) -> Option<&str> {
        self.scope_code.as_deref()
    }

    /// Returns the scope code or the empty string for the default scope.
    #[must_use]
    pub fn scope_code_or_empty(&self) -> &str {
        self.scope_code.as_deref().unwrap_or("")
    }

    /// Returns the output file stem: `default` or `<scope>-<scope_code>`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        match &self.scope_code {
            Some(code) => format!("{}-{}", self.scope.as_str(), code),
            None => self.scope.as_str().to_string(),
        }
    }
}
