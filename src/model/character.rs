//! Character records and API page envelopes.
//!
//! The upstream API returns loosely shaped JSON. Known attributes are typed;
//! anything else is kept in [`Character::extra`] so unknown fields survive
//! without unchecked dynamic access.

use super::identifiers::CharacterId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== CharacterStatus =====

/// Life status reported by the API.
///
/// Parsed case-insensitively; anything unrecognised becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    /// Character is alive.
    Alive,
    /// Character is dead.
    Dead,
    /// Status not known upstream.
    #[default]
    Unknown,
}

impl CharacterStatus {
    /// Display label, matching the API's capitalisation.
    pub fn label(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "alive" => CharacterStatus::Alive,
            "dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        status.label().to_string()
    }
}

// ===== NamedResource =====

/// A `{name, url}` reference to another API resource (origin, location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedResource {
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Resource URL; empty when the API has none.
    #[serde(default)]
    pub url: String,
}

// ===== Character =====

/// A character as returned by the character source.
///
/// Only `id` and `name` are required. Identity is `id`; two records with the
/// same id are the same character even if other fields differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identity.
    pub id: CharacterId,
    /// Display name, used for filtering.
    pub name: String,
    /// Life status.
    #[serde(default)]
    pub status: CharacterStatus,
    /// Species, e.g. "Human".
    #[serde(default)]
    pub species: String,
    /// Sub-type; the API calls this field `type`.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Gender as reported upstream.
    #[serde(default)]
    pub gender: String,
    /// Place of origin.
    #[serde(default)]
    pub origin: Option<NamedResource>,
    /// Last known location.
    #[serde(default)]
    pub location: Option<NamedResource>,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Episode URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Canonical resource URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Creation timestamp upstream.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Character {
    /// Minimal character with only identity and name set.
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: CharacterStatus::Unknown,
            species: String::new(),
            kind: String::new(),
            gender: String::new(),
            origin: None,
            location: None,
            image: None,
            episode: Vec::new(),
            url: None,
            created: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Builder-style status setter.
    pub fn with_status(mut self, status: CharacterStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder-style species setter.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle_lower` must already be lowercased. The empty needle matches
    /// every name.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

// ===== Pages =====

/// Pagination metadata attached to each page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters upstream.
    #[serde(default)]
    pub count: Option<u64>,
    /// Total number of pages upstream.
    #[serde(default)]
    pub pages: Option<u32>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of results from the character source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata; some sources omit it.
    #[serde(default)]
    pub info: Option<PageInfo>,
    /// Characters on this page, in upstream order.
    #[serde(default)]
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// Page with results and no metadata.
    pub fn from_results(results: Vec<Character>) -> Self {
        Self {
            info: None,
            results,
        }
    }
}
