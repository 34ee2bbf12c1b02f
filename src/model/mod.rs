//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod character;
pub mod error;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use character::{Character, CharacterPage, CharacterStatus, NamedResource, PageInfo};
pub use error::SourceError;
pub use identifiers::{CharacterId, InvalidPage, PageCursor};
pub use key_action::KeyAction;
