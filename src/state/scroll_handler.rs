//! Horizontal paging keyboard action handler.
//!
//! Pure functions that move the viewport and feed the resulting offset to the scroll
//! tracker, exactly as a touch scroll would.

use super::screen::ScreenState;
use crate::model::KeyAction;
use crate::view_state::PageIndex;

/// Handle a paging action.
///
/// `ScrollLeft`/`ScrollRight` move continuously by `scroll_step` columns; the page
/// actions snap to page boundaries. Every other action returns the state unchanged.
pub fn handle_scroll_action(mut state: ScreenState, action: KeyAction, scroll_step: u16) -> ScreenState {
    let count = state.document_count();
    let step = f64::from(scroll_step);

    match action {
        KeyAction::ScrollLeft => state.viewport_mut().scroll_by(-step, count),
        KeyAction::ScrollRight => state.viewport_mut().scroll_by(step, count),
        KeyAction::PrevPage | KeyAction::NextPage | KeyAction::FirstPage | KeyAction::LastPage => {
            let current = state.visible_index();
            let target = match action {
                KeyAction::PrevPage => current.prev(),
                KeyAction::NextPage => current.next(),
                KeyAction::LastPage => state.model().stats_index(),
                _ => PageIndex::FIRST,
            };
            state.viewport_mut().snap_to(target, count);
        }
        _ => return state,
    }

    state.sync_scroll();
    state
}
