//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod screen;
pub mod scroll_handler;
pub mod viewport;

pub use screen::ScreenState;
pub use scroll_handler::handle_scroll_action;
pub use viewport::Viewport;
