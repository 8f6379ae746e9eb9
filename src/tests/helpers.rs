//! Shared fixtures for whitebox tests.

use crate::config::ResolvedConfig;
use crate::model::{DocumentId, DocumentRecord};
use crate::store::DocumentStore;
use crate::traits::{ScanOutcome, ScanService};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Terminal width used by [`app_with`]; one page is this many columns wide.
pub const WIDTH: u16 = 60;

/// Document with the given id; later `n` means newer.
pub fn doc(id: &str, n: i64) -> DocumentRecord {
    DocumentRecord::captured(DocumentId::new(id).unwrap(), format!("/inbox/{id}.jpg"), n)
}

/// Store holding `ids` in that display order.
pub fn store_of(ids: &[&str]) -> DocumentStore {
    let docs = ids
        .iter()
        .enumerate()
        .map(|(i, id)| doc(id, (ids.len() - i) as i64));
    DocumentStore::with_documents(docs, Duration::ZERO).unwrap()
}

/// App over `store` on a `WIDTH`x`height` test terminal.
///
/// The returned runtime runs the scans and must outlive the app.
pub fn app_with(
    store: &DocumentStore,
    scanner: Arc<dyn ScanService>,
    height: u16,
) -> (Runtime, TuiApp<TestBackend>) {
    let runtime = Runtime::new().unwrap();
    let terminal = Terminal::new(TestBackend::new(WIDTH, height)).unwrap();
    let app = TuiApp::new_for_test(
        terminal,
        store.clone(),
        scanner,
        runtime.handle().clone(),
        &ResolvedConfig::default(),
    );
    (runtime, app)
}

/// Plain key press.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Character key press.
pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Scan service that holds every scan until the test releases it.
pub struct GatedScanner {
    gate: tokio::sync::Mutex<Option<tokio::sync::oneshot::Receiver<ScanOutcome>>>,
    calls: std::sync::Mutex<usize>,
}

impl GatedScanner {
    /// Scanner plus the sender that completes its first scan.
    pub fn new() -> (Arc<Self>, tokio::sync::oneshot::Sender<ScanOutcome>) {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let scanner = Self {
            gate: tokio::sync::Mutex::new(Some(rx)),
            calls: std::sync::Mutex::new(0),
        };
        (Arc::new(scanner), tx)
    }

    /// Number of scans started.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ScanService for GatedScanner {
    async fn scan(&self, _config: &crate::config::ScanConfig) -> ScanOutcome {
        *self.calls.lock().unwrap() += 1;
        let gate = self.gate.lock().await.take();
        match gate {
            Some(rx) => rx.await.unwrap_or(ScanOutcome::Cancelled),
            None => ScanOutcome::Cancelled,
        }
    }
}

/// Render the backend buffer as text, trailing blanks trimmed, blank lines dropped.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}
