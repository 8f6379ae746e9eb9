//! TUI rendering and terminal management (impure shell)

mod action_bar;
pub mod constants;
mod indicator;
mod layout;
mod pages;
mod styles;

pub use action_bar::ActionBar;
pub use indicator::PageIndicator;
pub use layout::{calculate_areas, render_layout, ReviewAreas, ScreenView, TITLE};
pub use pages::{format_ratio, format_rotation, format_timestamp, DocumentPage, StatsPage};
pub use styles::{ColorConfig, ReviewStyles};

use crate::adapters::{SharedStatusBar, ToastNotifier};
use crate::capture::{CaptureCollaborators, CaptureCoordinator};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, DocumentId, KeyAction, StoreError};
use crate::state::{handle_scroll_action, ScreenState, Viewport};
use crate::store::DocumentStore;
use crate::traits::{
    DocumentActions, DocumentEditActions, Notifier, ProjectionSource, ScanOutcome, ScanService,
};
use crate::view_state::ViewportDirective;
use constants::FALLBACK_PAGE_WIDTH;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    screen: ScreenState,
    projection: Arc<dyn ProjectionSource>,
    editor: Arc<dyn DocumentEditActions>,
    coordinator: CaptureCoordinator,
    scanner: Arc<dyn ScanService>,
    runtime: Handle,
    /// Scan outcomes travel back to the control thread here.
    outcome_tx: mpsc::UnboundedSender<ScanOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<ScanOutcome>,
    status_bar: SharedStatusBar,
    toasts: ToastNotifier,
    key_bindings: KeyBindings,
    scroll_step: u16,
    styles: ReviewStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        store: DocumentStore,
        scanner: Arc<dyn ScanService>,
        runtime: Handle,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::assemble(terminal, store, scanner, runtime, config))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after input, after a scan
    /// completes and whenever the projection changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.tick();
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        store: DocumentStore,
        scanner: Arc<dyn ScanService>,
        runtime: Handle,
        config: &ResolvedConfig,
    ) -> Self {
        let width = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => FALLBACK_PAGE_WIDTH,
        };

        let store = Arc::new(store);
        let actions: Arc<dyn DocumentActions> = store.clone();
        let status_bar = SharedStatusBar::new();
        let toasts = ToastNotifier::new();
        let coordinator = CaptureCoordinator::new(
            config.scan.clone(),
            CaptureCollaborators {
                actions,
                status_bar: Arc::new(status_bar.clone()),
                notifier: Arc::new(toasts.clone()),
            },
        );
        let screen = ScreenState::new(&*store, Viewport::new(f64::from(width)));
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        info!(documents = screen.document_count(), "Review screen ready");

        Self {
            terminal,
            screen,
            projection: store.clone(),
            editor: store,
            coordinator,
            scanner,
            runtime,
            outcome_tx,
            outcome_rx,
            status_bar,
            toasts,
            key_bindings: KeyBindings::default(),
            scroll_step: config.scroll_step,
            styles: ReviewStyles::default(),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.toasts.dismiss();

        match action {
            KeyAction::Quit => return true,
            KeyAction::Scan => self.start_scan(),
            KeyAction::RotateDocument => {
                self.edit_current(|editor, id| editor.rotate_document(id));
            }
            KeyAction::DeleteDocument => {
                self.edit_current(|editor, id| editor.delete_document(id));
            }
            KeyAction::ScrollLeft
            | KeyAction::ScrollRight
            | KeyAction::PrevPage
            | KeyAction::NextPage
            | KeyAction::FirstPage
            | KeyAction::LastPage => {
                self.screen = handle_scroll_action(self.screen.clone(), action, self.scroll_step);
            }
        }
        false
    }

    /// Begin a capture and run the scan on the runtime.
    ///
    /// The outcome comes back through the channel and is applied on a later tick, so
    /// scrolling stays live while the scan is in flight.
    fn start_scan(&mut self) {
        let Some(request) = self.coordinator.begin_scan() else {
            return;
        };
        let scanner = Arc::clone(&self.scanner);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = scanner.scan(request.config()).await;
            if tx.send(outcome).is_err() {
                debug!("Review screen closed before the scan finished");
            }
        });
    }

    /// Apply a per-document action to the document under the action bar.
    fn edit_current<F>(&mut self, edit: F)
    where
        F: FnOnce(&dyn DocumentEditActions, &DocumentId) -> Result<(), StoreError>,
    {
        let Some(id) = self.screen.current_document().map(|doc| doc.id.clone()) else {
            debug!("No document under the action bar");
            return;
        };
        if let Err(err) = edit(self.editor.as_ref(), &id) {
            warn!(%id, error = %err, "Document action failed");
            self.toasts.notify_error(&err.to_string());
        }
        self.refresh_projection();
    }

    /// Apply finished scans and projection changes. Returns true if anything changed.
    fn tick(&mut self) -> bool {
        let completed = self.drain_scan_outcomes();
        let rebuilt = self.refresh_projection();
        completed || rebuilt
    }

    fn drain_scan_outcomes(&mut self) -> bool {
        let mut any = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            let report = self.coordinator.complete_scan(outcome);
            debug!(?report, "Scan completed");
            any = true;
        }
        any
    }

    /// Rebuild the render model if the projection moved on. Returns whether the
    /// rebuild changed anything on screen.
    fn refresh_projection(&mut self) -> bool {
        if !self.screen.is_stale(self.projection.as_ref()) {
            return false;
        }
        let previous_pages = self.screen.model().len();
        let (mut screen, directive) = self
            .screen
            .clone()
            .apply_projection(self.projection.as_ref());
        screen.apply_directive(directive);
        let redraw = directive == ViewportDirective::ResetToFirstPage
            || screen.shows_changes(previous_pages);
        if !redraw {
            debug!(revision = screen.revision(), "Rebuilt off-screen rows only");
        }
        self.screen = screen;
        redraw
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let width = if width > 0 { width } else { FALLBACK_PAGE_WIDTH };
        let page = self.screen.visible_index();
        self.screen.viewport_mut().resize(f64::from(width), page);
        self.screen.sync_scroll();
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let notification = self.toasts.current();
        let view = ScreenView {
            screen: &self.screen,
            status_bar_hidden: self.status_bar.is_hidden(),
            capturing: self.coordinator.is_capturing(),
            notification: notification.as_deref(),
            styles: self.styles,
        };
        self.terminal.draw(|frame| render_layout(frame, &view))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        store: DocumentStore,
        scanner: Arc<dyn ScanService>,
        runtime: Handle,
        config: &ResolvedConfig,
    ) -> Self {
        let mut app = Self::assemble(terminal, store, scanner, runtime, config);
        app.styles = ReviewStyles::new(ColorConfig::new(false));
        app
    }

    pub(crate) fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub(crate) fn is_capturing(&self) -> bool {
        self.coordinator.is_capturing()
    }

    pub(crate) fn status_bar_hidden(&self) -> bool {
        self.status_bar.is_hidden()
    }

    pub(crate) fn notification(&self) -> Option<String> {
        self.toasts.current()
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Block until the in-flight scan reports back, then apply it like a tick would.
    pub(crate) fn wait_for_scan_test(&mut self) {
        if let Some(outcome) = self.outcome_rx.blocking_recv() {
            self.coordinator.complete_scan(outcome);
        }
        self.refresh_projection();
    }

    pub(crate) fn tick_test(&mut self) -> bool {
        self.tick()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the review screen
///
/// Handles terminal setup, runs the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_review(
    store: DocumentStore,
    scanner: Arc<dyn ScanService>,
    runtime: Handle,
    config: &ResolvedConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(store, scanner, runtime, config)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
