//! In-memory favorite store.

use super::FavoriteStore;
use crate::model::{Character, CharacterId};
use std::collections::BTreeSet;
use tracing::debug;

/// Favorite ids held for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryFavoriteStore {
    favorites: BTreeSet<CharacterId>,
}

impl MemoryFavoriteStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteStore for MemoryFavoriteStore {
    fn is_favorite(&self, character: &Character) -> bool {
        self.favorites.contains(&character.id)
    }

    fn add_favorite(&mut self, character: &Character) {
        debug!(id = %character.id, name = %character.name, "Adding favorite");
        self.favorites.insert(character.id);
    }

    fn remove_favorite(&mut self, character: &Character) {
        debug!(id = %character.id, name = %character.name, "Removing favorite");
        self.favorites.remove(&character.id);
    }

    fn favorite_count(&self) -> usize {
        self.favorites.len()
    }
}
