//! Error types for roster.
//!
//! This module defines the centralized error type [`RosterError`] and a type
//! alias [`Result`] for convenient error handling throughout the application.
//! All errors are implemented using the `thiserror` crate for automatic
//! `Error` trait implementation.

use thiserror::Error;

/// The main error type for roster operations.
///
/// This enum consolidates all error conditions that can occur during
/// execution, from backend API calls to I/O failures and configuration
/// issues. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The backend rejected a request or returned a non-success status.
    ///
    /// The string contains the status code and, where available, the response
    /// body. The caller-facing layers treat any `Api` error as one uniform
    /// failure class.
    #[error("API error: {0}")]
    Api(String),

    /// Transport-level HTTP failure (connection refused, DNS, TLS, timeout).
    ///
    /// Wraps errors from `reqwest`. Automatically converts using the
    /// `#[from]` attribute.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credential slot read or write failed.
    ///
    /// Occurs when the persisted token file cannot be loaded, stored, or
    /// cleared. The string contains a description of what went wrong.
    #[error("Session error: {0}")]
    Session(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for roster operations.
///
/// This is a type alias for `std::result::Result<T, RosterError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RosterError>;
