//! Recording test doubles for the collaborator traits.
//!
//! Every double is cheaply cloneable; clones share their recordings so a test can
//! keep one handle while the code under test owns another.
//!
//! # Example
//!
//! ```ignore
//! let actions = MockActions::new();
//! let coordinator = CaptureCoordinator::new(config, CaptureCollaborators {
//!     actions: Arc::new(actions.clone()),
//!     ..
//! });
//! // ... drive the coordinator ...
//! assert_eq!(actions.upload_calls(), 1);
//! ```

use crate::config::ScanConfig;
use crate::model::{DocumentRecord, StoreError};
use crate::traits::{DocumentActions, Notifier, ScanOutcome, ScanService, StatusBar};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== MockActions =====

#[derive(Debug, Default)]
struct ActionsLog {
    upload_calls: usize,
    added: Vec<DocumentRecord>,
    reject_with: Option<StoreError>,
}

/// Records upload triggers and added documents.
#[derive(Debug, Clone, Default)]
pub struct MockActions {
    log: Arc<Mutex<ActionsLog>>,
}

impl MockActions {
    /// Accept-everything double.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `add_document` fail with `err`.
    pub fn reject_adds_with(&self, err: StoreError) {
        lock(&self.log).reject_with = Some(err);
    }

    /// How many times `upload_pending_documents` was called.
    pub fn upload_calls(&self) -> usize {
        lock(&self.log).upload_calls
    }

    /// Documents successfully added, in call order.
    pub fn added(&self) -> Vec<DocumentRecord> {
        lock(&self.log).added.clone()
    }

    /// Ids of the documents successfully added.
    pub fn added_ids(&self) -> Vec<String> {
        lock(&self.log)
            .added
            .iter()
            .map(|d| d.id.to_string())
            .collect()
    }
}

impl DocumentActions for MockActions {
    fn upload_pending_documents(&self) {
        lock(&self.log).upload_calls += 1;
    }

    fn add_document(&self, document: DocumentRecord) -> Result<(), StoreError> {
        let mut log = lock(&self.log);
        if let Some(err) = log.reject_with.clone() {
            return Err(err);
        }
        log.added.push(document);
        Ok(())
    }
}

// ===== MockScanner =====

/// Scan service replaying scripted outcomes; `Cancelled` once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct MockScanner {
    outcomes: Arc<Mutex<VecDeque<ScanOutcome>>>,
    calls: Arc<Mutex<Vec<ScanConfig>>>,
}

impl MockScanner {
    /// Scanner that will return `outcomes` in order.
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = ScanOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    /// Number of scans performed.
    pub fn scan_calls(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Configurations the scanner was invoked with.
    pub fn configs(&self) -> Vec<ScanConfig> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl ScanService for MockScanner {
    async fn scan(&self, config: &ScanConfig) -> ScanOutcome {
        lock(&self.calls).push(config.clone());
        lock(&self.outcomes)
            .pop_front()
            .unwrap_or(ScanOutcome::Cancelled)
    }
}

// ===== MockStatusBar =====

/// One recorded `set_hidden` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBarCall {
    /// Requested visibility.
    pub hidden: bool,
    /// Whether the change was animated.
    pub animated: bool,
}

/// Records status bar toggles.
#[derive(Debug, Clone, Default)]
pub struct MockStatusBar {
    calls: Arc<Mutex<Vec<StatusBarCall>>>,
}

impl MockStatusBar {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in order.
    pub fn calls(&self) -> Vec<StatusBarCall> {
        lock(&self.calls).clone()
    }

    /// `hidden` value of the most recent call.
    pub fn last(&self) -> Option<bool> {
        lock(&self.calls).last().map(|call| call.hidden)
    }
}

impl StatusBar for MockStatusBar {
    fn set_hidden(&self, hidden: bool, animated: bool) {
        lock(&self.calls).push(StatusBarCall { hidden, animated });
    }
}

// ===== MockNotifier =====

/// Records user-facing error messages.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown, in order.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl Notifier for MockNotifier {
    fn notify_error(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}
