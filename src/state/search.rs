//! Search input state machine.
//!
//! SearchState is a sum type representing the two possible input states:
//! - Inactive: search bar hidden, the last committed term stays applied
//! - Typing: user is editing the term; every edit is applied immediately
//!
//! The term itself lives on the list controller. These transitions only
//! track what the search bar shows and where the cursor is.

// ===== SearchState =====

/// Search bar state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Search bar hidden.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts chars, not bytes.
    Typing {
        /// Current query text.
        query: String,
        /// Cursor position in chars, `0..=query.chars().count()`.
        cursor: usize,
    },
}

impl SearchState {
    /// Query being edited, if typing.
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    /// True while the search bar is open.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== Transitions =====

/// Byte offset of the `char_index`-th char, or the end of the string.
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Open the search bar, pre-filled with the term currently applied.
///
/// Cursor lands at the end. No-op if already typing.
pub fn activate_search_input(state: SearchState, current_term: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: current_term.to_string(),
            cursor: current_term.chars().count(),
        },
        other => other,
    }
}

/// Insert a char at the cursor and advance it.
///
/// No-op if not typing.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let at = byte_offset(&query, cursor);
            query.insert(at, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the char before the cursor.
///
/// No-op at position 0 or if not typing.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            let at = byte_offset(&query, cursor - 1);
            query.remove(at);
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one char left, saturating at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor one char right, saturating at the end.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}
