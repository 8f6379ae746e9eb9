//! Scanned document records.

use crate::model::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upload lifecycle of a document, as tracked by the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Captured, not yet sent.
    #[default]
    Pending,
    /// Upload in flight.
    Uploading,
    /// Stored remotely.
    Uploaded,
    /// Last upload attempt failed.
    Error,
    /// Any status string this build does not know.
    #[serde(other)]
    Unknown,
}

impl UploadStatus {
    /// Whether a background upload pass should pick this document up.
    pub fn needs_upload(self) -> bool {
        matches!(self, UploadStatus::Pending | UploadStatus::Error)
    }

    /// Lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Uploaded => "uploaded",
            UploadStatus::Error => "error",
            UploadStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned document as seen by the review screen.
///
/// Created by the capture pipeline on successful ingestion. Status, rotation and the
/// `deleted` flag are mutated by the store, never by the review controller. Deleted
/// records are filtered out before they reach the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Stable, never-reused identifier.
    pub id: DocumentId,
    /// Path or URI of the processed (cropped) page image.
    pub image: String,
    /// Path or URI of the unprocessed capture.
    pub original_image: String,
    /// Upload status.
    #[serde(default)]
    pub status: UploadStatus,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Display rotation in degrees.
    #[serde(default)]
    pub rotation: i32,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted: bool,
}

impl DocumentRecord {
    /// New pending record for a freshly captured image.
    pub fn captured(id: DocumentId, image: impl Into<String>, timestamp: i64) -> Self {
        let image = image.into();
        Self {
            id,
            original_image: image.clone(),
            image,
            status: UploadStatus::Pending,
            timestamp,
            rotation: 0,
            deleted: false,
        }
    }

    /// Rotation after one more clockwise quarter turn, normalized to `[0, 360)`.
    pub fn next_rotation(&self) -> i32 {
        (self.rotation + 90).rem_euclid(360)
    }
}
