//! View-state layer for the paged review screen.
//!
//! Pure, render-independent logic binding the projection to what is on screen:
//! the paged render model, the scroll tracker and the action bar binding.

pub mod action_bar;
pub mod render_model;
pub mod scroll;
pub mod types;

pub use action_bar::current_action;
pub use render_model::{rebuild, Page, Rebuild, RenderModel, ViewportDirective};
pub use scroll::{page_for_offset, ScrollState, ScrollTracker};
pub use types::PageIndex;
