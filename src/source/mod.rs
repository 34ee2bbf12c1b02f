//! Character sources.
//!
//! This module provides the page-loading side of the app:
//! - [`CharacterSource`], the paginated source contract
//! - [`HttpCharacterSource`], the REST implementation
//! - [`PageFetcher`], which runs source calls off the UI thread and hands
//!   completions back for the event loop to poll

use crate::model::{CharacterPage, PageCursor, SourceError};

pub mod fetcher;
pub mod http;

pub use fetcher::{PageCompletion, PageFetcher};
pub use http::HttpCharacterSource;

/// Paginated, 1-indexed character source.
///
/// Calls may block; the UI never calls this directly, it goes through
/// [`PageFetcher`].
pub trait CharacterSource: Send + Sync {
    /// Fetch one page of characters.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for transport, status or decode failures.
    fn get_characters(&self, page: PageCursor) -> Result<CharacterPage, SourceError>;
}

/// A page load the controller wants performed.
///
/// Produced by the list controller when it enters the loading state; the
/// matching [`PageCompletion`] carries it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Page to request.
    pub page: PageCursor,
}

impl PageRequest {
    /// Request for the given page.
    pub fn new(page: PageCursor) -> Self {
        Self { page }
    }
}
