//! Error types for the docreview application.
//!
//! A small hierarchical taxonomy built with `thiserror`, composing via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the binary
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - [`StoreError`] - seed loading and store mutations
//!   - `std::io::Error` - terminal failures
//! - [`ScanError`] - capture failures reported by a scan service
//!
//! # Recovery Strategy
//!
//! Scan errors and store rejections raised while the review screen is running are
//! **non-fatal**: they are reported to the user and the screen stays interactive.
//! Only startup failures (config, logging, seed file, terminal) end the process.

use crate::model::DocumentId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The document store rejected an operation or its seed file.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the document store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The seed file could not be read.
    #[error("Failed to read seed file at {path}: {reason}")]
    SeedRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The seed file is not a JSON array of document records.
    #[error("Invalid seed file {path}: {reason}")]
    SeedParse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A document with this id already exists; ids are never reused.
    #[error("Document {0} already exists")]
    DuplicateId(DocumentId),

    /// No visible document carries this id.
    #[error("Document {0} not found")]
    NotFound(DocumentId),
}

/// Failure reported by a scan service for one capture attempt.
///
/// Always non-fatal: the capture coordinator surfaces the message to the user and
/// returns to idle without touching the document collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Message reported by the capture device or SDK.
    #[error("{0}")]
    Device(String),

    /// The scan inbox directory could not be listed.
    #[error("Scan inbox {path} is unavailable: {reason}")]
    InboxUnavailable {
        /// Inbox directory.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The inbox holds no image that has not been captured already.
    #[error("Nothing to scan in {path}")]
    NothingToScan {
        /// Inbox directory.
        path: PathBuf,
    },
}
