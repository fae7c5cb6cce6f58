//! Error types for the Reef dashboard.
//!
//! Provides the shared error enum used across workspace crates.

use thiserror::Error;

/// Main error type for the Reef dashboard.
#[derive(Debug, Error)]
pub enum ReefError {
    /// Static asset lookup failed.
    #[error("Icon error: {message}")]
    Icon {
        /// Human-readable error message.
        message: String,
        /// Actionable hint for the user.
        hint: Option<String>,
    },

    /// Configuration error.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
    },

    /// Unexpected internal error.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message.
        message: String,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ReefError {
    // ========== Constructors ==========

    /// Create a new icon error.
    pub fn icon(message: impl Into<String>) -> Self {
        Self::Icon { message: message.into(), hint: None }
    }

    /// Create a new icon error with a hint.
    pub fn icon_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Icon { message: message.into(), hint: Some(hint.into()) }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Create a new internal error with source.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Box::new(source)) }
    }

    // ========== Methods ==========

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Icon { .. } => "Icon",
            Self::Config { .. } => "Config",
            Self::Internal { .. } => "Internal",
        }
    }

    /// Get actionable hint for the user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Icon { hint, .. } => hint.as_deref(),
            Self::Config { .. } => None,
            Self::Internal { .. } => Some("Please report this issue"),
        }
    }
}
