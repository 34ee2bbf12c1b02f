//! Row and status styling.
//!
//! Provides distinct colors for character status and favorites, with a
//! monochrome fallback when colors are disabled.

use crate::model::CharacterStatus;
use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints and secondary info.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Bold header for help categories.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / config
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== ListStyles =====

/// Styles for the card list and detail panel.
#[derive(Debug, Clone, Copy)]
pub struct ListStyles {
    alive: Style,
    dead: Style,
    unknown: Style,
    favorite_marker: Style,
    selected: Style,
    badge: Style,
    colored: bool,
}

impl ListStyles {
    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled only modifiers (bold, reversed) are used.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                alive: Style::default().fg(Color::Green),
                dead: Style::default().fg(Color::Red),
                unknown: Style::default().fg(Color::Gray),
                favorite_marker: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                badge: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                colored: true,
            }
        } else {
            Self {
                alive: Style::default(),
                dead: Style::default(),
                unknown: Style::default(),
                favorite_marker: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                badge: Style::default().add_modifier(Modifier::BOLD),
                colored: false,
            }
        }
    }

    /// Style for a status label.
    pub fn style_for_status(&self, status: CharacterStatus) -> Style {
        match status {
            CharacterStatus::Alive => self.alive,
            CharacterStatus::Dead => self.dead,
            CharacterStatus::Unknown => self.unknown,
        }
    }

    /// Style for the favorite star.
    pub fn favorite_marker(&self) -> Style {
        self.favorite_marker
    }

    /// Highlight for the selected row.
    pub fn selected(&self) -> Style {
        self.selected
    }

    /// Header favorite-count badge.
    pub fn badge(&self) -> Style {
        self.badge
    }

    /// Whether these styles use color.
    pub fn colored(&self) -> bool {
        self.colored
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
