//! Favorite bookkeeping.
//!
//! The list controller only talks to [`FavoriteStore`]; which characters are
//! favorites, and how long that survives, is the store's business.

use crate::model::Character;

pub mod memory;

pub use memory::MemoryFavoriteStore;

/// Tracks which characters the user has marked, keyed by character id.
///
/// All operations are synchronous and authoritative: once `add_favorite`
/// returns, `is_favorite` reports `true` for that id.
pub trait FavoriteStore {
    /// Whether the character is currently a favorite.
    fn is_favorite(&self, character: &Character) -> bool;

    /// Mark a character as favorite. Idempotent.
    fn add_favorite(&mut self, character: &Character);

    /// Unmark a character. Removing a non-favorite is a no-op.
    fn remove_favorite(&mut self, character: &Character);

    /// Total number of favorites, including ones not currently loaded.
    fn favorite_count(&self) -> usize;
}

impl<S: FavoriteStore + ?Sized> FavoriteStore for &mut S {
    fn is_favorite(&self, character: &Character) -> bool {
        (**self).is_favorite(character)
    }

    fn add_favorite(&mut self, character: &Character) {
        (**self).add_favorite(character)
    }

    fn remove_favorite(&mut self, character: &Character) {
        (**self).remove_favorite(character)
    }

    fn favorite_count(&self) -> usize {
        (**self).favorite_count()
    }
}
