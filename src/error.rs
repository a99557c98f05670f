//! Error handling for the coolme application.
//! Defines the error taxonomy and result type used by every generator.

use std::io;
use thiserror::Error;

/// Custom error types for coolme operations.
///
/// Variants that abort a whole generation call (missing template, missing binding,
/// directory failure) propagate to the binary and produce a non-zero exit status.
/// Per-entity conditions are reported and recorded in the
/// [`GenerationReport`](crate::reporter::GenerationReport) instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The template path does not resolve to a file.
    #[error("Template file not found: '{path}'.")]
    TemplateNotFound { path: String },

    /// The template exists but could not be read (permissions, encoding).
    #[error("Failed to read template '{path}': {source}.")]
    TemplateReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A placeholder in the template has no value in the bindings.
    #[error("No value bound for placeholder '{name}'.")]
    MissingBinding { name: String },

    /// An entity has no entry in the output table mapping.
    #[error("No output table specified for '{entity}'.")]
    MissingOutputMapping { entity: String },

    #[error("Failed to create directory '{path}': {source}.")]
    DirectoryCreateFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{path}': {source}.")]
    FileWriteFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The requested ingestion environment is not in the environment table.
    #[error("Unknown environment '{name}' (available: {available}).")]
    UnknownEnvironment { name: String, available: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with coolme's [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
