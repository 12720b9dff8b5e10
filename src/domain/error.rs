//! Error types for the locator engine.
//!
//! This module defines the centralized error type [`LocatorError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Nothing in this crate is allowed to panic or surface an error past the engine
//! boundary during normal operation: collaborator failures (map animation,
//! clipboard) are absorbed locally with degraded fallbacks and a log record.

use thiserror::Error;

/// The main error type for locator engine operations.
///
/// This enum consolidates all error conditions that can occur while driving the
/// engine, from configuration parsing to bridge message encoding. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Static content could not be assembled into a catalog.
    ///
    /// Occurs when the branch catalog violates an invariant, such as a
    /// duplicate location id. The string contains a description of what
    /// went wrong.
    #[error("Content error: {0}")]
    Content(String),

    /// Map bridge communication failed.
    ///
    /// Occurs when a command or event cannot be encoded to or decoded from
    /// the JSON wire format shared with the map-rendering collaborator.
    #[error("Map bridge error: {0}")]
    Map(String),

    /// Clipboard collaborator failed.
    ///
    /// Never propagated to callers of the engine; the action executor logs
    /// the failure and continues.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for locator operations.
///
/// This is a type alias for `std::result::Result<T, LocatorError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LocatorError>;
