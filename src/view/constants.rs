//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width percentage of the card list; the detail panel gets the rest.
pub const LIST_WIDTH_PERCENT: u16 = 60;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Event poll interval; completions are picked up at this rate.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Favorite marker shown before favorited rows and in the header badge.
pub const FAVORITE_STAR: &str = "★";

/// Placeholder for non-favorited rows.
pub const NOT_FAVORITE_STAR: &str = "☆";
