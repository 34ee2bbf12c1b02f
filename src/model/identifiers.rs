//! Core identifier and cursor newtypes with smart constructors.
//!
//! `CharacterId` wraps the upstream numeric id; `PageCursor` is the
//! 1-indexed page counter and rejects zero at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, stable identifier of a character as assigned by the upstream API.
///
/// Used as the identity key by the favorite store and by the list renderer
/// to keep the selection stable across incremental appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(u64);

impl CharacterId {
    /// Wrap a raw upstream id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CharacterId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Page cursor identifying the next page to request. Always >= 1.
///
/// Monotonic: the only mutation is [`PageCursor::advance`]. There is no
/// reset, so a cursor never goes back to page 1 once it has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageCursor(u32);

impl PageCursor {
    /// The first page.
    pub const FIRST: PageCursor = PageCursor(1);

    /// Smart constructor: rejects page 0.
    pub fn new(raw: u32) -> Result<Self, InvalidPage> {
        if raw == 0 {
            Err(InvalidPage::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    /// Page number as sent to the API.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Move to the next page.
    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Rejected page number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPage {
    /// Pages are 1-indexed.
    #[error("Page number must be at least 1")]
    Zero,
}

// ===== Tests =====
