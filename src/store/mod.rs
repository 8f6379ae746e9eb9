//! In-memory document store backing the review screen.
//!
//! The store owns the document collection, keeps it newest-first and derives the
//! statistics aggregate. It is the reference [`ProjectionSource`]: a record's `Arc`
//! stays the same until that record is mutated, and the stats `Arc` is only replaced
//! when the counts actually change.

mod scanner;

pub use scanner::InboxScanner;

use crate::model::{DocumentId, DocumentRecord, StatsRecord, StoreError, UploadStatus};
use crate::traits::{DocumentActions, DocumentEditActions, ProjectionSource};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct StoreInner {
    /// Newest first, deleted records included.
    records: Vec<Arc<DocumentRecord>>,
    stats: Arc<StatsRecord>,
    revision: u64,
}

impl StoreInner {
    fn visible(&self) -> impl Iterator<Item = &Arc<DocumentRecord>> {
        self.records.iter().filter(|doc| !doc.deleted)
    }

    fn position_visible(&self, id: &DocumentId) -> Option<usize> {
        self.records
            .iter()
            .position(|doc| !doc.deleted && &doc.id == id)
    }

    /// Record a mutation: bump the revision, swap stats only if they changed.
    fn touch(&mut self) {
        let stats = StatsRecord::from_documents(self.visible());
        if stats != *self.stats {
            self.stats = Arc::new(stats);
        }
        self.revision += 1;
    }

    /// Replace record `index` with an edited copy.
    fn edit(&mut self, index: usize, f: impl FnOnce(&mut DocumentRecord)) {
        let mut doc = (*self.records[index]).clone();
        f(&mut doc);
        self.records[index] = Arc::new(doc);
    }
}

/// Shared handle to the document collection. Clones share state.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    inner: Arc<Mutex<StoreInner>>,
    upload_delay: Duration,
}

impl DocumentStore {
    /// Empty store whose simulated uploads take `upload_delay`.
    pub fn new(upload_delay: Duration) -> Self {
        Self {
            inner: Arc::default(),
            upload_delay,
        }
    }

    /// Store pre-populated with `documents`, sorted newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records share an id.
    pub fn with_documents(
        documents: impl IntoIterator<Item = DocumentRecord>,
        upload_delay: Duration,
    ) -> Result<Self, StoreError> {
        let mut records: Vec<Arc<DocumentRecord>> = Vec::new();
        for doc in documents {
            if records.iter().any(|existing| existing.id == doc.id) {
                return Err(StoreError::DuplicateId(doc.id));
            }
            records.push(Arc::new(doc));
        }
        // Stable sort keeps file order for equal timestamps.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let stats = Arc::new(StatsRecord::from_documents(
            records.iter().filter(|doc| !doc.deleted),
        ));
        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner {
                records,
                stats,
                revision: 0,
            })),
            upload_delay,
        })
    }

    /// Load a JSON array of document records.
    ///
    /// # Errors
    ///
    /// - [`StoreError::SeedRead`] if the file cannot be read
    /// - [`StoreError::SeedParse`] if it is not an array of records
    /// - [`StoreError::DuplicateId`] if two records share an id
    pub fn load_seed(path: &Path, upload_delay: Duration) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::SeedRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let documents: Vec<DocumentRecord> =
            serde_json::from_str(&content).map_err(|e| StoreError::SeedParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        info!(path = %path.display(), count = documents.len(), "Loaded seed documents");
        Self::with_documents(documents, upload_delay)
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark the given in-flight uploads as done.
    fn finish_upload(&self, ids: &[DocumentId]) {
        let mut inner = self.lock();
        let mut finished = 0usize;
        for index in 0..inner.records.len() {
            let doc = &inner.records[index];
            if doc.status == UploadStatus::Uploading && ids.contains(&doc.id) {
                inner.edit(index, |doc| doc.status = UploadStatus::Uploaded);
                finished += 1;
            }
        }
        if finished > 0 {
            inner.touch();
        }
        debug!(finished, "Uploads finished");
    }
}

impl ProjectionSource for DocumentStore {
    fn documents(&self) -> Vec<Arc<DocumentRecord>> {
        self.lock().visible().cloned().collect()
    }

    fn stats(&self) -> Arc<StatsRecord> {
        Arc::clone(&self.lock().stats)
    }

    fn revision(&self) -> u64 {
        self.lock().revision
    }
}

impl DocumentActions for DocumentStore {
    fn upload_pending_documents(&self) {
        let ids: Vec<DocumentId> = {
            let mut inner = self.lock();
            let targets: Vec<usize> = (0..inner.records.len())
                .filter(|&i| !inner.records[i].deleted && inner.records[i].status.needs_upload())
                .collect();
            for &index in &targets {
                inner.edit(index, |doc| doc.status = UploadStatus::Uploading);
            }
            if !targets.is_empty() {
                inner.touch();
            }
            targets
                .into_iter()
                .map(|i| inner.records[i].id.clone())
                .collect()
        };

        if ids.is_empty() {
            debug!("Nothing to upload");
            return;
        }
        info!(count = ids.len(), "Uploading pending documents");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = self.clone();
                let delay = self.upload_delay;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    store.finish_upload(&ids);
                });
            }
            Err(_) => self.finish_upload(&ids),
        }
    }

    fn add_document(&self, document: DocumentRecord) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.records.iter().any(|doc| doc.id == document.id) {
            return Err(StoreError::DuplicateId(document.id));
        }
        info!(id = %document.id, "Document added");
        inner.records.insert(0, Arc::new(document));
        inner.touch();
        Ok(())
    }
}

impl DocumentEditActions for DocumentStore {
    fn rotate_document(&self, id: &DocumentId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner
            .position_visible(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        inner.edit(index, |doc| doc.rotation = doc.next_rotation());
        inner.touch();
        debug!(%id, "Document rotated");
        Ok(())
    }

    fn delete_document(&self, id: &DocumentId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner
            .position_visible(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        inner.edit(index, |doc| doc.deleted = true);
        inner.touch();
        info!(%id, "Document deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
