//! Application state and transitions.
//!
//! AppState is the root UI state: the list controller plus everything the
//! terminal front-end needs around it (selection, search bar, help overlay,
//! favorite badge). No I/O happens here; page loads leave as
//! [`PageRequest`]s and come back as [`PageCompletion`]s.

use crate::favorites::MemoryFavoriteStore;
use crate::model::{Character, CharacterId};
use crate::source::{PageCompletion, PageRequest};
use crate::state::{ListController, ListEvent, SearchState};
use std::sync::mpsc::{self, Receiver};

// ===== Selection =====

/// Selected row, tracked by identity.
///
/// The id keeps the highlight on the same character when pages are appended
/// or the filter changes; the index disambiguates duplicates and is the
/// fallback when the selected character is filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Last known position in the visible list.
    pub index: usize,
    /// Identity of the selected character, if any.
    pub id: Option<CharacterId>,
}

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// - **Load**: Idle ⇄ Loading (owned by the controller)
/// - **Search**: Inactive ⇄ Typing (see `SearchState`)
/// - **Help**: hidden ⇄ visible
pub struct AppState {
    controller: ListController<MemoryFavoriteStore>,
    events: Receiver<ListEvent>,

    /// Latest favorite total reported by the controller.
    pub favorite_count: usize,

    /// Selected row in the visible list.
    pub selection: Selection,

    /// Search bar state.
    pub search: SearchState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Rows the list area showed on the last draw; used for paging.
    pub viewport_rows: usize,
}

impl AppState {
    /// Fresh state with an empty list and an empty favorite store.
    pub fn new() -> Self {
        Self::with_store(MemoryFavoriteStore::new())
    }

    /// Fresh state over an existing favorite store.
    pub fn with_store(store: MemoryFavoriteStore) -> Self {
        let (tx, events) = mpsc::channel();
        Self {
            controller: ListController::new(store, tx),
            events,
            favorite_count: 0,
            selection: Selection::default(),
            search: SearchState::Inactive,
            help_visible: false,
            viewport_rows: 10,
        }
    }

    /// The list controller.
    pub fn controller(&self) -> &ListController<MemoryFavoriteStore> {
        &self.controller
    }

    /// Mutable access to the list controller.
    pub fn controller_mut(&mut self) -> &mut ListController<MemoryFavoriteStore> {
        &mut self.controller
    }

    /// Start the first page load.
    pub fn initialize(&mut self) -> Option<PageRequest> {
        self.controller.initialize()
    }

    /// Apply a finished page load, then refresh the badge and selection.
    pub fn apply_completion(&mut self, completion: PageCompletion) {
        self.controller
            .complete_load(completion.request, completion.outcome);
        self.drain_events();
        self.resync_selection();
    }

    /// Pull pending controller events into UI state.
    ///
    /// Returns true if anything changed.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        for event in self.events.try_iter() {
            match event {
                ListEvent::FavoriteCountChanged(count) => {
                    changed |= self.favorite_count != count;
                    self.favorite_count = count;
                }
            }
        }
        changed
    }

    // ----- filter inputs -----

    /// Apply a new search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.controller.set_search_term(term);
        self.resync_selection();
    }

    /// Flip favorites-only mode.
    pub fn toggle_favorites_only(&mut self) {
        let next = !self.controller.filter().favorites_only;
        self.controller.set_favorites_only(next);
        self.resync_selection();
    }

    // ----- selection -----

    /// Number of rows currently visible.
    pub fn visible_len(&self) -> usize {
        self.controller.visible().len()
    }

    /// Resolve the selection against the current visible list.
    ///
    /// Prefers the remembered index if it still holds the selected id, then
    /// the first row with that id, then the remembered index clamped to the
    /// list. `None` when nothing is visible.
    pub fn selected_index(&self) -> Option<usize> {
        let visible = self.controller.visible();
        if visible.is_empty() {
            return None;
        }

        if let Some(id) = self.selection.id {
            if visible
                .get(self.selection.index)
                .is_some_and(|c| c.id == id)
            {
                return Some(self.selection.index);
            }
            if let Some(position) = visible.iter().position(|c| c.id == id) {
                return Some(position);
            }
        }

        Some(self.selection.index.min(visible.len() - 1))
    }

    /// The selected character, if any.
    pub fn selected_character(&self) -> Option<&Character> {
        let index = self.selected_index()?;
        self.controller.visible().get(index).copied()
    }

    /// Move the selection to a visible row, clamped to the list.
    pub fn select_index(&mut self, index: usize) {
        let visible = self.controller.visible();
        if visible.is_empty() {
            self.selection = Selection::default();
            return;
        }
        let index = index.min(visible.len() - 1);
        self.selection = Selection {
            index,
            id: Some(ListController::<MemoryFavoriteStore>::track_by(
                visible[index],
            )),
        };
    }

    /// Re-anchor the selection after the visible list changed.
    pub fn resync_selection(&mut self) {
        match self.selected_index() {
            Some(index) => self.select_index(index),
            None => self.selection.index = 0,
        }
    }

    /// Whether the selection sits on the last visible row.
    pub fn at_bottom(&self) -> bool {
        match self.selected_index() {
            Some(index) => index + 1 == self.visible_len(),
            None => false,
        }
    }

    // ----- favorites -----

    /// Toggle favorite on the selected row.
    pub fn toggle_selected_favorite(&mut self) -> Option<CharacterId> {
        let index = self.selected_index()?;
        let toggled = self.controller.toggle_favorite_at(index);
        self.drain_events();
        self.resync_selection();
        toggled
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("controller", &self.controller)
            .field("favorite_count", &self.favorite_count)
            .field("selection", &self.selection)
            .field("search", &self.search)
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
