//! Collaborator contracts for dependency injection.
//!
//! The review controller never reaches for ambient global state: every external
//! capability it drives is one of these traits, handed in at construction time.
//!
//! # Traits
//!
//! - [`ProjectionSource`] - reactive, read-only document collection and stats
//! - [`DocumentActions`] - the two store mutations the controller may trigger
//! - [`DocumentEditActions`] - per-document actions offered by the action bar
//! - [`ScanService`] - asynchronous capture device / SDK
//! - [`StatusBar`] - system chrome toggled around a capture
//! - [`Notifier`] - user-facing error surface
//! - [`ScrollSurface`] - the physical horizontal scroll position

pub mod actions;
pub mod chrome;
pub mod projection;
pub mod scan;

pub use actions::{DocumentActions, DocumentEditActions};
pub use chrome::{Notifier, ScrollSurface, StatusBar};
pub use projection::ProjectionSource;
pub use scan::{ScanOutcome, ScanService};
