//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the system status line in lines (0 while hidden).
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the header (border + title row).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the page indicator line.
pub const PAGE_INDICATOR_HEIGHT: u16 = 1;

/// Height of the action bar.
///
/// When there is no document to act on, a blank spacer of the same height takes its
/// place so the page does not jump.
pub const ACTION_BAR_HEIGHT: u16 = 3;

/// Height of the footer (notification or key hints).
pub const FOOTER_HEIGHT: u16 = 1;

/// Page width used before the terminal reports a size.
pub const FALLBACK_PAGE_WIDTH: u16 = 80;
