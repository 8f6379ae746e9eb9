//! Capture coordinator: scan-and-ingest with a fire-and-forget upload trigger.
//!
//! # State Machine
//!
//! ```text
//!            begin_scan()                 complete_scan(outcome)
//!   Idle ───────────────────▶ Capturing ─────────────────────────▶ Idle
//!    ▲  (upload, hide bar)      │   ▲   (ingest / report, show bar)
//!    │                          │   │
//!    └── begin_scan() ignored ──┘   └── begin_scan() ignored while capturing
//! ```
//!
//! There is no error state: failures are reported to the user and the coordinator
//! returns to `Idle`. The scan itself is the one suspension point. It is made
//! explicit by splitting the operation in two: [`CaptureCoordinator::begin_scan`]
//! performs the synchronous side effects and hands back a [`ScanRequest`], the caller
//! awaits the scan service wherever it likes, and [`CaptureCoordinator::complete_scan`]
//! resumes. [`CaptureCoordinator::start_scan`] composes the three for callers that
//! can simply await.

use crate::config::ScanConfig;
use crate::model::DocumentId;
use crate::model::ScanError;
use crate::traits::{DocumentActions, Notifier, ScanOutcome, ScanService, StatusBar};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of the capture coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No scan in flight.
    #[default]
    Idle,
    /// Waiting for the scan service.
    Capturing,
}

/// Ticket for one in-flight scan, carrying the configuration to scan with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    config: ScanConfig,
}

impl ScanRequest {
    /// Configuration the scan service must be invoked with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Take the configuration, e.g. to move it into a spawned task.
    pub fn into_config(self) -> ScanConfig {
        self.config
    }
}

/// What a finished (or refused) scan amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureReport {
    /// The scanned document was committed to the collection.
    Ingested(DocumentId),
    /// The scan failed; the message was shown to the user.
    Failed(ScanError),
    /// The store refused the scanned document; the message was shown to the user.
    Rejected(DocumentId),
    /// The user dismissed the scanner.
    Cancelled,
    /// A scan was already in flight, or a completion arrived with none in flight.
    Ignored,
}

/// External capabilities the coordinator drives.
#[derive(Clone)]
pub struct CaptureCollaborators {
    /// Store mutations: upload trigger and document ingestion.
    pub actions: Arc<dyn DocumentActions>,
    /// System status bar.
    pub status_bar: Arc<dyn StatusBar>,
    /// User-facing error surface.
    pub notifier: Arc<dyn Notifier>,
}

/// Orchestrates "start upload → scan → ingest or report".
pub struct CaptureCoordinator {
    state: CaptureState,
    config: ScanConfig,
    collaborators: CaptureCollaborators,
}

impl CaptureCoordinator {
    /// Coordinator scanning with the fixed `config`.
    pub fn new(config: ScanConfig, collaborators: CaptureCollaborators) -> Self {
        Self {
            state: CaptureState::Idle,
            config,
            collaborators,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether a scan is in flight.
    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// `Idle → Capturing`.
    ///
    /// In order: triggers the background upload of pending documents (not awaited),
    /// hides the status bar, then returns the request the caller must run against the
    /// scan service. Returns `None` without any side effect while a scan is already in
    /// flight.
    pub fn begin_scan(&mut self) -> Option<ScanRequest> {
        if self.is_capturing() {
            warn!("Scan requested while a scan is in flight; ignoring");
            return None;
        }

        self.state = CaptureState::Capturing;
        info!("Starting scan");

        self.collaborators.actions.upload_pending_documents();
        self.collaborators.status_bar.set_hidden(true, true);

        Some(ScanRequest {
            config: self.config.clone(),
        })
    }

    /// `Capturing → Idle`, consuming the scan service's single result.
    ///
    /// A scanned document is committed exactly once; a failure (or a store
    /// rejection) is reported to the user and leaves the collection untouched. Every
    /// branch restores the status bar before returning. A completion that arrives
    /// while `Idle` is dropped.
    pub fn complete_scan(&mut self, outcome: ScanOutcome) -> CaptureReport {
        if !self.is_capturing() {
            warn!(?outcome, "Scan completion without a scan in flight; ignoring");
            return CaptureReport::Ignored;
        }

        let report = match outcome {
            ScanOutcome::Scanned(document) => {
                let id = document.id.clone();
                match self.collaborators.actions.add_document(document) {
                    Ok(()) => {
                        info!(document_id = %id, "Scanned document ingested");
                        CaptureReport::Ingested(id)
                    }
                    Err(err) => {
                        warn!(document_id = %id, error = %err, "Store rejected scanned document");
                        self.collaborators.notifier.notify_error(&err.to_string());
                        CaptureReport::Rejected(id)
                    }
                }
            }
            ScanOutcome::Failed(err) => {
                warn!(error = %err, "Scan failed");
                self.collaborators.notifier.notify_error(&err.to_string());
                CaptureReport::Failed(err)
            }
            ScanOutcome::Cancelled => {
                debug!("Scan cancelled by user");
                CaptureReport::Cancelled
            }
        };

        self.collaborators.status_bar.set_hidden(false, true);
        self.state = CaptureState::Idle;
        report
    }

    /// Run a complete scan against `scanner`, suspending while it captures.
    ///
    /// Returns [`CaptureReport::Ignored`] if a scan is already in flight.
    pub async fn start_scan<S>(&mut self, scanner: &S) -> CaptureReport
    where
        S: ScanService + ?Sized,
    {
        let Some(request) = self.begin_scan() else {
            return CaptureReport::Ignored;
        };
        let outcome = scanner.scan(request.config()).await;
        self.complete_scan(outcome)
    }
}

impl std::fmt::Debug for CaptureCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureCoordinator")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
