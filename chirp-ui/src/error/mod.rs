//! Error types and error handling
//!
//! The filters and table queries never fail; errors only come from loading
//! configuration and templates.

use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum ChirpUiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Template compilation or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Template was not found in any location
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template file could not be read
    #[error("Failed to read template '{name}': {source}")]
    Io {
        /// Template name
        name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
