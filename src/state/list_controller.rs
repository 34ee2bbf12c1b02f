//! Infinite-scroll list controller (pure).
//!
//! Owns the loaded characters, the page cursor and the load state, and
//! projects the visible list from the filter inputs and favorite membership.
//! It performs no I/O: loads are handed out as [`PageRequest`]s for the shell
//! to dispatch, and come back through [`ListController::complete_load`].

use crate::favorites::FavoriteStore;
use crate::model::{Character, CharacterId, CharacterPage, PageCursor, SourceError};
use crate::source::PageRequest;
use std::sync::mpsc::Sender;
use tracing::{debug, error, info, warn};

// ===== LoadState =====

/// Two-state in-flight guard.
///
/// At most one page request is outstanding; while `Loading`, further load
/// attempts are dropped (not queued).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No request outstanding.
    #[default]
    Idle,
    /// A request for `page` has been handed out and not yet completed.
    Loading {
        /// Page in flight.
        page: PageCursor,
    },
}

impl LoadState {
    /// True while a request is outstanding.
    pub fn is_loading(self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }
}

// ===== FilterInputs =====

/// Externally supplied filter inputs.
///
/// Set by the surrounding UI; the controller only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    /// Case-insensitive name substring. Empty matches everything.
    pub search_term: String,
    /// When set, only favorites are visible.
    pub favorites_only: bool,
}

// ===== ListEvent =====

/// Outbound notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The favorite total may have changed; carries the current value.
    FavoriteCountChanged(usize),
}

// ===== ListController =====

/// Loads pages on demand, keeps an append-only list and exposes a filtered
/// view of it.
pub struct ListController<S: FavoriteStore> {
    characters: Vec<Character>,
    page: PageCursor,
    load_state: LoadState,
    reached_end: bool,
    filter: FilterInputs,
    store: S,
    events: Sender<ListEvent>,
}

impl<S: FavoriteStore> ListController<S> {
    /// New controller with an empty list, cursor on page 1 and default
    /// filter inputs.
    pub fn new(store: S, events: Sender<ListEvent>) -> Self {
        Self {
            characters: Vec::new(),
            page: PageCursor::FIRST,
            load_state: LoadState::Idle,
            reached_end: false,
            filter: FilterInputs::default(),
            store,
            events,
        }
    }

    // ----- loading -----

    /// Trigger the first page load.
    pub fn initialize(&mut self) -> Option<PageRequest> {
        info!(page = %self.page, "Initializing character list");
        self.load_next_page()
    }

    /// Request the page under the cursor unless a request is in flight.
    ///
    /// Returns the request the caller must dispatch, or `None` when a load is
    /// already outstanding (the attempt is dropped, not queued).
    pub fn load_next_page(&mut self) -> Option<PageRequest> {
        if let LoadState::Loading { page } = self.load_state {
            debug!(in_flight = %page, "Load already in flight, ignoring");
            return None;
        }

        self.load_state = LoadState::Loading { page: self.page };
        Some(PageRequest::new(self.page))
    }

    /// Scroll reached the bottom of the rendered list.
    ///
    /// Advances the cursor and loads, unless a load is in flight, in which
    /// case nothing changes.
    pub fn on_scroll_bottom(&mut self) -> Option<PageRequest> {
        if self.load_state.is_loading() {
            debug!("Scroll-bottom while loading, ignoring");
            return None;
        }

        self.page.advance();
        self.load_next_page()
    }

    /// Apply the outcome of a request previously returned by this controller.
    ///
    /// On success the results are appended in order and the favorite count is
    /// emitted. On failure the error is logged and the list is left alone.
    /// Either way the controller returns to idle. Completions that do not
    /// match the request in flight are ignored.
    pub fn complete_load(
        &mut self,
        request: PageRequest,
        outcome: Result<CharacterPage, SourceError>,
    ) {
        match self.load_state {
            LoadState::Loading { page } if page == request.page => {}
            state => {
                warn!(
                    page = %request.page,
                    ?state,
                    "Ignoring completion that does not match the request in flight"
                );
                return;
            }
        }

        self.load_state = LoadState::Idle;

        match outcome {
            Ok(page) => {
                let added = page.results.len();
                let upstream_pages = page.info.as_ref().and_then(|info| info.pages);
                if page.info.as_ref().is_some_and(|info| info.next.is_none()) {
                    self.reached_end = true;
                }
                self.characters.extend(page.results);
                info!(
                    page = %request.page,
                    added,
                    total = self.characters.len(),
                    ?upstream_pages,
                    "Loaded character page"
                );
                self.emit_favorite_count();
            }
            Err(e) if e.is_past_last_page() => {
                self.reached_end = true;
                info!(page = %request.page, "Requested page is past the last page");
            }
            Err(e) => {
                error!(page = %request.page, error = %e, "Failed to load characters");
            }
        }
    }

    // ----- projection -----

    /// The list as it should be displayed right now.
    ///
    /// Name filter first, then favorites-only. Order follows arrival order.
    /// Recomputed on every call.
    pub fn visible(&self) -> Vec<&Character> {
        let needle = self.filter.search_term.to_lowercase();
        self.characters
            .iter()
            .filter(|c| c.name_contains(&needle))
            .filter(|c| !self.filter.favorites_only || self.store.is_favorite(c))
            .collect()
    }

    /// Identity used by the renderer across appends.
    pub fn track_by(character: &Character) -> CharacterId {
        character.id
    }

    // ----- favorites -----

    /// Flip favorite membership of a character and emit the new count.
    pub fn toggle_favorite(&mut self, character: &Character) {
        if self.store.is_favorite(character) {
            self.store.remove_favorite(character);
        } else {
            self.store.add_favorite(character);
        }
        self.emit_favorite_count();
    }

    /// Toggle the character at `index` in the visible list.
    ///
    /// Returns the toggled character's id, or `None` if out of range.
    pub fn toggle_favorite_at(&mut self, index: usize) -> Option<CharacterId> {
        let character = self.visible().get(index).map(|c| (*c).clone())?;
        self.toggle_favorite(&character);
        Some(character.id)
    }

    /// Whether a character is currently a favorite.
    pub fn is_favorite(&self, character: &Character) -> bool {
        self.store.is_favorite(character)
    }

    /// Publish the store's favorite total.
    pub fn emit_favorite_count(&self) {
        let count = self.store.favorite_count();
        if self
            .events
            .send(ListEvent::FavoriteCountChanged(count))
            .is_err()
        {
            debug!(count, "Favorite count listener gone");
        }
    }

    // ----- inputs -----

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Switch favorites-only mode.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.filter.favorites_only = favorites_only;
    }

    // ----- accessors -----

    /// Current filter inputs.
    pub fn filter(&self) -> &FilterInputs {
        &self.filter
    }

    /// Every loaded character, in arrival order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Page the cursor points at.
    pub fn page(&self) -> PageCursor {
        self.page
    }

    /// Current load state.
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// True once the source has reported there are no pages after the ones
    /// loaded. Loading is not blocked by it.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Borrow the favorite store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: FavoriteStore> std::fmt::Debug for ListController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("loaded", &self.characters.len())
            .field("page", &self.page)
            .field("load_state", &self.load_state)
            .field("reached_end", &self.reached_end)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "list_controller_tests.rs"]
mod tests;
