//! Terminal-side chrome: status bar visibility and the notification footer.

use crate::traits::{Notifier, StatusBar};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Status bar whose visibility the renderer reads on every frame.
#[derive(Debug, Clone, Default)]
pub struct SharedStatusBar {
    hidden: Arc<AtomicBool>,
}

impl SharedStatusBar {
    /// Visible status bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bar is currently hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }
}

impl StatusBar for SharedStatusBar {
    fn set_hidden(&self, hidden: bool, animated: bool) {
        // A terminal has nothing to animate; the flag is accepted and ignored.
        debug!(hidden, animated, "Status bar visibility");
        self.hidden.store(hidden, Ordering::Relaxed);
    }
}

/// Keeps the most recent error message for the footer.
#[derive(Debug, Clone, Default)]
pub struct ToastNotifier {
    latest: Arc<Mutex<Option<String>>>,
}

impl ToastNotifier {
    /// Notifier with nothing to show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently on display.
    pub fn current(&self) -> Option<String> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dismiss the current message.
    pub fn dismiss(&self) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Notifier for ToastNotifier {
    fn notify_error(&self, message: &str) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }
}
