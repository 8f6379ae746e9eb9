//! Inbox-backed scan service.
//!
//! Stands in for a camera SDK: each scan "captures" the oldest image file in the
//! inbox directory that has not been captured before.

use crate::config::ScanConfig;
use crate::model::{DocumentId, DocumentRecord, ScanError};
use crate::traits::{ScanOutcome, ScanService};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// Scans image files dropped into a directory.
#[derive(Debug)]
pub struct InboxScanner {
    inbox: PathBuf,
    consumed: Mutex<HashSet<PathBuf>>,
}

impl InboxScanner {
    /// Scanner reading from `inbox`.
    pub fn new(inbox: impl Into<PathBuf>) -> Self {
        Self {
            inbox: inbox.into(),
            consumed: Mutex::new(HashSet::new()),
        }
    }

    /// Inbox directory.
    pub fn inbox(&self) -> &Path {
        &self.inbox
    }

    /// Oldest accepted file not captured yet; ties broken by name.
    async fn next_candidate(&self, config: &ScanConfig) -> Result<PathBuf, ScanError> {
        let unavailable = |e: std::io::Error| ScanError::InboxUnavailable {
            path: self.inbox.clone(),
            reason: e.to_string(),
        };
        let mut entries = tokio::fs::read_dir(&self.inbox).await.map_err(unavailable)?;

        let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
            let Ok(meta) = entry.metadata().await else {
                continue;
            };
            let path = entry.path();
            let accepted = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| config.accepts_extension(ext));
            if meta.is_file() && accepted {
                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                candidates.push((modified, path));
            }
        }

        let consumed = self.consumed.lock().unwrap_or_else(PoisonError::into_inner);
        candidates.retain(|(_, path)| !consumed.contains(path));
        candidates.sort();

        candidates
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| ScanError::NothingToScan {
                path: self.inbox.clone(),
            })
    }
}

#[async_trait]
impl ScanService for InboxScanner {
    async fn scan(&self, config: &ScanConfig) -> ScanOutcome {
        tokio::time::sleep(Duration::from_millis(config.capture_delay_ms)).await;

        let path = match self.next_candidate(config).await {
            Ok(path) => path,
            Err(err) => {
                debug!(error = %err, "Inbox scan produced nothing");
                return ScanOutcome::Failed(err);
            }
        };
        self.consumed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.clone());

        let record = DocumentRecord::captured(
            DocumentId::generate(),
            path.display().to_string(),
            chrono::Utc::now().timestamp_millis(),
        );
        info!(id = %record.id, image = %record.image, "Captured document");
        ScanOutcome::Scanned(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UploadStatus;

    fn fresh_inbox() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("docreview_inbox_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn instant() -> ScanConfig {
        ScanConfig {
            capture_delay_ms: 0,
            ..ScanConfig::default()
        }
    }

    #[tokio::test]
    async fn missing_inbox_fails_with_unavailable() {
        let scanner = InboxScanner::new(std::env::temp_dir().join("docreview_no_such_inbox"));
        let outcome = scanner.scan(&instant()).await;
        assert!(matches!(
            outcome,
            ScanOutcome::Failed(ScanError::InboxUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn empty_inbox_fails_with_nothing_to_scan() {
        let dir = fresh_inbox();
        let outcome = InboxScanner::new(&dir).scan(&instant()).await;
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(
            outcome,
            ScanOutcome::Failed(ScanError::NothingToScan { path: dir })
        );
    }

    #[tokio::test]
    async fn each_image_is_captured_once() {
        let dir = fresh_inbox();
        std::fs::write(dir.join("page.jpg"), b"jpeg").unwrap();
        let scanner = InboxScanner::new(&dir);

        let first = scanner.scan(&instant()).await;
        let second = scanner.scan(&instant()).await;
        std::fs::remove_dir_all(&dir).ok();

        match first {
            ScanOutcome::Scanned(doc) => {
                assert!(doc.image.ends_with("page.jpg"));
                assert_eq!(doc.status, UploadStatus::Pending);
                assert!(doc.timestamp > 0);
            }
            other => panic!("expected a document, got {other:?}"),
        }
        assert!(matches!(
            second,
            ScanOutcome::Failed(ScanError::NothingToScan { .. })
        ));
    }

    #[tokio::test]
    async fn files_with_other_extensions_are_skipped() {
        let dir = fresh_inbox();
        std::fs::write(dir.join("notes.txt"), b"text").unwrap();
        std::fs::write(dir.join("scan.PNG"), b"png").unwrap();

        let outcome = InboxScanner::new(&dir).scan(&instant()).await;
        std::fs::remove_dir_all(&dir).ok();

        match outcome {
            ScanOutcome::Scanned(doc) => assert!(doc.image.ends_with("scan.PNG")),
            other => panic!("expected a document, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn scans_get_distinct_ids() {
        let dir = fresh_inbox();
        std::fs::write(dir.join("a.jpg"), b"a").unwrap();
        std::fs::write(dir.join("b.jpg"), b"b").unwrap();
        let scanner = InboxScanner::new(&dir);

        let first = scanner.scan(&instant()).await;
        let second = scanner.scan(&instant()).await;
        std::fs::remove_dir_all(&dir).ok();

        match (first, second) {
            (ScanOutcome::Scanned(a), ScanOutcome::Scanned(b)) => assert_ne!(a.id, b.id),
            other => panic!("expected two documents, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn directories_named_like_images_are_skipped() {
        let dir = fresh_inbox();
        std::fs::create_dir_all(dir.join("album.jpg")).unwrap();
        std::fs::write(dir.join("real.jpg"), b"jpeg").unwrap();
        let scanner = InboxScanner::new(&dir);

        let first = scanner.scan(&instant()).await;
        let second = scanner.scan(&instant()).await;
        std::fs::remove_dir_all(&dir).ok();

        match first {
            ScanOutcome::Scanned(doc) => assert!(doc.image.ends_with("real.jpg")),
            other => panic!("expected a document, got {other:?}"),
        }
        assert!(matches!(
            second,
            ScanOutcome::Failed(ScanError::NothingToScan { .. })
        ));
    }
}
