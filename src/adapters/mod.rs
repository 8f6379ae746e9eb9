//! Collaborator implementations.
//!
//! - [`chrome`] - status bar and notifier backed by shared state the terminal UI reads
//! - [`mock`] - recording doubles for tests

pub mod chrome;
pub mod mock;

pub use chrome::{SharedStatusBar, ToastNotifier};
