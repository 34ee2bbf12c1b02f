//! Selection movement keyboard action handler.
//!
//! Pure functions that move the selection in response to navigation actions
//! and report when the list's bottom has been reached.

use crate::model::KeyAction;
use crate::source::PageRequest;
use crate::state::AppState;
use tracing::trace;

/// Handle a navigation keyboard action.
///
/// Moves the selection, then, if a downward move ends on the last visible
/// row, fires the controller's scroll-bottom callback. Returns the page request to dispatch,
/// if one was issued.
///
/// # Arguments
/// * `state` - Application state to transform
/// * `action` - The navigation action to handle
/// * `viewport_rows` - Rows visible in the list (for paging)
pub fn handle_selection_action(
    state: &mut AppState,
    action: KeyAction,
    viewport_rows: usize,
) -> Option<PageRequest> {
    if !action.is_navigation() {
        return None;
    }

    let len = state.visible_len();
    if len == 0 {
        return None;
    }

    let current = state.selected_index().unwrap_or(0);
    let page = viewport_rows.max(1);
    let target = match action {
        KeyAction::SelectNext => current.saturating_add(1),
        KeyAction::SelectPrev => current.saturating_sub(1),
        KeyAction::PageDown => current.saturating_add(page),
        KeyAction::PageUp => current.saturating_sub(page),
        KeyAction::SelectFirst => 0,
        KeyAction::SelectLast => len - 1,
        _ => current,
    };

    state.select_index(target);
    trace!(?action, from = current, to = target.min(len - 1), "Selection moved");

    if action.moves_down() && state.at_bottom() {
        state.controller_mut().on_scroll_bottom()
    } else {
        None
    }
}
