//! Screen chrome the controller toggles or writes to.

/// System status bar visibility.
pub trait StatusBar: Send + Sync {
    /// Show or hide the status bar. Best effort; failures are not reported.
    fn set_hidden(&self, hidden: bool, animated: bool);
}

/// User-facing error surface (an alert, toast or footer message).
pub trait Notifier: Send + Sync {
    /// Present an error message to the user.
    fn notify_error(&self, message: &str);
}

/// The physical horizontal scroll position of the paged list.
pub trait ScrollSurface {
    /// Move the scroll position to `offset_x`.
    fn scroll_to(&mut self, offset_x: f64);
}
