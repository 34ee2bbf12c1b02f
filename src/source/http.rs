//! REST character source.
//!
//! Speaks the Rick and Morty API shape: `GET {base}/character?page=N`
//! answering `{"info": {...}, "results": [...]}`.

use super::CharacterSource;
use crate::model::{CharacterPage, PageCursor, SourceError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Character source backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    client: Client,
    base_url: Url,
}

impl HttpCharacterSource {
    /// Build a source for the given API root.
    ///
    /// `timeout` of `None` means requests may wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if `base_url` does not parse or
    /// cannot carry path segments, `SourceError::Network` if the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("charlist/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        info!(base_url = %base_url, ?timeout, "HTTP character source ready");

        Ok(Self { client, base_url })
    }

    /// URL for one page: `{base}/character?page={n}`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if the base cannot take segments.
    pub fn page_url(&self, page: PageCursor) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("character");
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &page.get().to_string());
        Ok(url)
    }
}

impl CharacterSource for HttpCharacterSource {
    fn get_characters(&self, page: PageCursor) -> Result<CharacterPage, SourceError> {
        let url = self.page_url(page)?;
        debug!(%url, "Requesting character page");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
