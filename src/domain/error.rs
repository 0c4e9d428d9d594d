//! Error types for the userdeck dashboard core.
//!
//! This module defines the centralized error type [`UserdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Form validation failures are not represented here: they are ordinary data
//! ([`crate::validation::ValidationError`]) surfaced next to the offending field.

use thiserror::Error;

/// Message stored in the user store when both fetch transports fail.
pub const FETCH_UNAVAILABLE_MESSAGE: &str = "Unable to fetch users from API";

/// The main error type for userdeck operations.
///
/// Transport variants (`Http`, `Timeout`, `Network`, `Parse`) are produced by the
/// data-fetch gateway and are recovered locally by the fallback transport. The
/// `Config` variant is a contract violation and is meant to be propagated to the
/// top of the program rather than handled.
///
/// # Examples
///
/// ```
/// use userdeck::domain::UserdeckError;
///
/// let err = UserdeckError::Http { status: 503 };
/// assert_eq!(err.to_string(), "HTTP error! status: 503");
/// ```
#[derive(Debug, Error)]
pub enum UserdeckError {
    /// A required configuration value is missing or malformed.
    ///
    /// The string names the environment variable(s) involved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote API answered with a non-2xx status code.
    #[error("HTTP error! status: {status}")]
    Http {
        /// Status code returned by the server.
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timeout")]
    Timeout,

    /// The request failed before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a valid JSON user list.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Both the primary and the fallback transport failed.
    #[error("Unable to fetch users from API")]
    Unavailable,

    /// Theme loading or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The async runtime could not run a task to completion.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// A specialized `Result` type for userdeck operations.
pub type Result<T> = std::result::Result<T, UserdeckError>;
