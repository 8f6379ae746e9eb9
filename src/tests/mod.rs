//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the terminal shell directly (keys, ticks, frames) and can
//! reach into private state for validation.

mod helpers;

mod view_snapshots;
