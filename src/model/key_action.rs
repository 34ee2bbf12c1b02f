//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Select the next character. Default: j/↓
    SelectNext,
    /// Select the previous character. Default: k/↑
    SelectPrev,
    /// Move the selection down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Move the selection up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Jump to the first character. Default: g/Home
    SelectFirst,
    /// Jump to the last loaded character. Default: G/End
    SelectLast,

    // Favorites
    /// Add or remove the selected character from favorites. Default: f/Space/Enter
    ToggleFavorite,
    /// Show only favorites, or everything. Default: F
    ToggleFavoritesOnly,

    // Search
    /// Open the search bar. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search term. Default: Esc
    ClearSearch,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions that move the selection.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::SelectNext
                | KeyAction::SelectPrev
                | KeyAction::PageDown
                | KeyAction::PageUp
                | KeyAction::SelectFirst
                | KeyAction::SelectLast
        )
    }

    /// True for navigation toward the end of the list.
    ///
    /// Only these count as scrolling to the bottom and may trigger the next
    /// page load.
    pub fn moves_down(self) -> bool {
        matches!(
            self,
            KeyAction::SelectNext | KeyAction::PageDown | KeyAction::SelectLast
        )
    }
}
