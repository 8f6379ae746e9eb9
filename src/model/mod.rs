//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod document;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod stats;

// Re-export for convenience
pub use document::{DocumentRecord, UploadStatus};
pub use error::{AppError, ScanError, StoreError};
pub use identifiers::{DocumentId, InvalidDocumentId};
pub use key_action::KeyAction;
pub use stats::StatsRecord;
