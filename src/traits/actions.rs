//! Write side of the document store, as seen by the review screen.

use crate::model::{DocumentId, DocumentRecord, StoreError};

/// Store mutations the capture coordinator may trigger.
pub trait DocumentActions: Send + Sync {
    /// Begin a background upload of every document that still needs one.
    ///
    /// Fire-and-forget: returns immediately and reports nothing back. Retrying failed
    /// uploads is the uploader's business.
    fn upload_pending_documents(&self);

    /// Commit a freshly scanned document to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the id is already taken.
    fn add_document(&self, document: DocumentRecord) -> Result<(), StoreError>;
}

/// Per-document actions offered by the action bar for the visible page.
pub trait DocumentEditActions: Send + Sync {
    /// Rotate the document a quarter turn clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no visible document has this id.
    fn rotate_document(&self, id: &DocumentId) -> Result<(), StoreError>;

    /// Soft-delete the document; it disappears from the projection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no visible document has this id.
    fn delete_document(&self, id: &DocumentId) -> Result<(), StoreError>;
}
