//! Error types for menagerie operations.
//!
//! This module defines [`MenagerieError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MenagerieError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MenagerieError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for menagerie operations.
#[derive(Debug, Error)]
pub enum MenagerieError {
    /// Dataset file not found at the expected location.
    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// Failed to parse the dataset file as JSON.
    #[error("Failed to parse dataset at {path}: {message}")]
    DatasetParseError { path: PathBuf, message: String },

    /// Template file not found at the expected location.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Template is missing the substitution token.
    #[error("Template {path} does not contain the '{token}' token")]
    TemplateMissingToken { path: PathBuf, token: String },

    /// No API key configured for a remote fetch.
    #[error("No API key configured. Set MENAGERIE_API_KEY or pass --api-key")]
    ApiKeyMissing,

    /// The animals API returned a non-success status.
    #[error("API returned HTTP {status} for '{name}'")]
    ApiStatusError { name: String, status: u16 },

    /// Network failure or undecodable API response.
    #[error("API request failed: {0}")]
    ApiRequestError(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for menagerie operations.
pub type Result<T> = std::result::Result<T, MenagerieError>;
