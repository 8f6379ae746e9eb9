//! Aggregate statistics shown on the trailing stats page.

use crate::model::{DocumentRecord, UploadStatus};
use serde::Serialize;
use std::sync::Arc;

/// Summary of the visible document collection.
///
/// Computed upstream of the review controller, which treats it as opaque and only
/// places it at the last page. It carries no id: its identity as the stats page is
/// purely positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    /// Number of visible (non-deleted) documents.
    pub document_count: usize,
    /// Documents waiting for upload.
    pub pending: usize,
    /// Documents with an upload in flight.
    pub uploading: usize,
    /// Documents stored remotely.
    pub uploaded: usize,
    /// Documents whose last upload failed.
    pub failed: usize,
}

impl StatsRecord {
    /// Tally the given records. Deleted records are skipped.
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Arc<DocumentRecord>>,
    {
        let mut stats = Self::default();
        for doc in documents.into_iter().filter(|d| !d.deleted) {
            stats.document_count += 1;
            match doc.status {
                UploadStatus::Pending => stats.pending += 1,
                UploadStatus::Uploading => stats.uploading += 1,
                UploadStatus::Uploaded => stats.uploaded += 1,
                UploadStatus::Error => stats.failed += 1,
                UploadStatus::Unknown => {}
            }
        }
        stats
    }

    /// Fraction of documents already uploaded, in `[0.0, 1.0]`. Empty collections are 0.
    pub fn uploaded_ratio(&self) -> f64 {
        if self.document_count == 0 {
            0.0
        } else {
            self.uploaded as f64 / self.document_count as f64
        }
    }
}
