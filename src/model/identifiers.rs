//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, stable identifier of a scanned document.
///
/// Never reused: once a document has carried an id, no other document may.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Smart constructor: validates non-empty document id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDocumentId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidDocumentId::Empty);
        }
        Ok(Self(raw))
    }

    /// Generate a fresh random id (uuid v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = InvalidDocumentId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejected document id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDocumentId {
    /// The id was an empty string.
    #[error("Document ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_accepts_simple_alphanumeric() {
        let id = DocumentId::new("abc123");
        assert!(id.is_ok(), "Simple alphanumeric should be accepted");
    }

    #[test]
    fn document_id_rejects_empty_string() {
        let id = DocumentId::new("");
        assert!(
            matches!(id, Err(InvalidDocumentId::Empty)),
            "Empty string should return InvalidDocumentId::Empty"
        );
    }

    #[test]
    fn document_id_display_returns_inner_string() {
        let id = DocumentId::new("doc-42").expect("Valid id");
        assert_eq!(id.to_string(), "doc-42");
        assert_eq!(id.as_str(), "doc-42");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b, "uuid v4 ids should not collide");
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn deserializing_empty_id_fails() {
        let result: Result<DocumentId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty id must be rejected at the boundary");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = DocumentId::new("a").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
    }
}
