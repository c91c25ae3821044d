//! # Error Handling for Potato Util
//!
//! This module defines custom error types for the utility functions provided
//! by the library. The `thiserror` crate is used to simplify error creation
//! and ensure consistent handling across the library.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the Potato Util library.
///
/// This type alias simplifies function signatures by defining a result type that always uses `UtilError` as the error variant.
pub type Result<T> = std::result::Result<T, UtilError>;

/// The main error type for Potato Util, encompassing all potential error cases.
///
/// `UtilError` is an enumerated type that represents different errors that can occur throughout the library. Each variant describes a specific error type with associated details.
#[derive(Error, Debug)]
pub enum UtilError {
    /// Error raised when an argument value is outside the accepted range.
    ///
    /// This error occurs for values such as an unsupported slug separator or
    /// a zero length bound. Type mismatches cannot occur at runtime; they are
    /// rejected by the compiler.
    #[error("Validation error: {message}.")]
    Validation {
        /// Detailed description of the rejected value.
        message: String,
    },

    /// Error related to configuration building or validation.
    ///
    /// This error occurs when there is a problem with configuration files or values.
    #[error("Configuration error: {message}.")]
    Configuration {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the configuration file that caused the error.
        path: Option<PathBuf>,
    },

    /// Error encountered while parsing a configuration document.
    ///
    /// This variant covers syntax errors reported by the underlying format
    /// parser and carries the source error for additional context.
    #[error("Failed to parse `{path:?}` as {format}: {source}")]
    Parse {
        /// Path of the document that failed to parse.
        path: PathBuf,
        /// Name of the document format, such as `TOML` or `YAML`.
        format: String,
        /// The underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// IO error encountered during file operations.
    ///
    /// This variant is used for errors encountered while reading configuration files.
    #[error("File IO error at `{path:?}`: {source}")]
    Io {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for UtilError {
    /// Converts a standard IO error into a `UtilError::Io`.
    ///
    /// # Parameters
    /// - `source`: The IO error encountered.
    ///
    /// # Returns
    /// - A `UtilError::Io` with an empty path if no path is provided.
    fn from(source: std::io::Error) -> Self {
        UtilError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl UtilError {
    /// Creates a `Validation` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the rejected value.
    ///
    /// # Returns
    /// - A `UtilError::Validation` containing the message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        UtilError::Validation {
            message: message.into(),
        }
    }

    /// Creates a `Configuration` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the configuration file causing the error.
    ///
    /// # Returns
    /// - A `UtilError::Configuration` containing the message and optional path.
    pub fn configuration<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        UtilError::Configuration {
            message: message.into(),
            path,
        }
    }

    /// Creates a `Parse` error for a document that failed to parse.
    ///
    /// # Parameters
    /// - `path`: The path of the document.
    /// - `format`: The name of the document format.
    /// - `source`: The underlying parser error.
    ///
    /// # Returns
    /// - A `UtilError::Parse` with the path, format name, and source.
    pub fn parse<S: Into<String>>(
        path: PathBuf,
        format: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        UtilError::Parse {
            path,
            format: format.into(),
            source,
        }
    }

    /// Wraps an IO error as an `Io` variant with the specified path.
    ///
    /// # Parameters
    /// - `path`: The file path associated with the IO error.
    /// - `source`: The original IO error.
    ///
    /// # Returns
    /// - A `UtilError::Io` with the specified path and source.
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        UtilError::Io { path, source }
    }
}
