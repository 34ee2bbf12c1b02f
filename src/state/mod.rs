//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod list_controller;
pub mod search;
pub mod selection_handler;

// Re-export for convenience
pub use app_state::{AppState, Selection};
pub use list_controller::{FilterInputs, ListController, ListEvent, LoadState};
pub use search::SearchState;
pub use selection_handler::handle_selection_action;
