//! Capture device abstraction.

use crate::config::ScanConfig;
use crate::model::{DocumentRecord, ScanError};
use async_trait::async_trait;

/// Result of exactly one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A document was captured.
    Scanned(DocumentRecord),
    /// The device reported an error.
    Failed(ScanError),
    /// The user dismissed the scanner; neither a document nor an error.
    Cancelled,
}

/// Hardware or SDK driven document capture.
///
/// Each call resolves exactly once, so the completion contract is carried by the
/// type system instead of by callback discipline.
///
/// # Example
///
/// ```ignore
/// use docreview::traits::{ScanOutcome, ScanService};
///
/// async fn capture<S: ScanService>(scanner: &S, config: &ScanConfig) {
///     match scanner.scan(config).await {
///         ScanOutcome::Scanned(doc) => println!("captured {}", doc.id),
///         ScanOutcome::Failed(err) => eprintln!("{err}"),
///         ScanOutcome::Cancelled => {}
///     }
/// }
/// ```
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Run one capture with the given configuration.
    async fn scan(&self, config: &ScanConfig) -> ScanOutcome;
}
