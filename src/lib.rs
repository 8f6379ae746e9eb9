//! Document review screen (docreview)
//!
//! Paged review screen for scanned documents, kept in sync with a background
//! capture/upload pipeline.
//!
//! Follows a Pure Core / Impure Shell architecture:
//! - [`view_state`] and [`state`] hold the pure paging, scroll and action bar logic
//! - [`capture`] coordinates the one-shot scan-and-ingest action
//! - [`traits`] names every external collaborator; [`store`] and [`adapters`] provide
//!   the in-process implementations
//! - [`view`] is the terminal shell

pub mod adapters;
pub mod capture;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod traits;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
