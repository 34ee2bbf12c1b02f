//! Tests for AppState.

use super::*;
use crate::model::{CharacterPage, PageCursor, SourceError};

fn character(id: u64, name: &str) -> Character {
    Character::new(id, name)
}

/// State with page 1 loaded from `(id, name)` pairs.
fn loaded(characters: &[(u64, &str)]) -> AppState {
    let mut state = AppState::new();
    let request = state.initialize().expect("first load");
    state.apply_completion(PageCompletion {
        request,
        outcome: Ok(CharacterPage::from_results(
            characters.iter().map(|(id, n)| character(*id, n)).collect(),
        )),
    });
    state
}

fn selected_name(state: &AppState) -> Option<String> {
    state.selected_character().map(|c| c.name.clone())
}

#[test]
fn new_state_has_no_selection_and_zero_badge() {
    let state = AppState::new();
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.favorite_count, 0);
    assert!(!state.help_visible);
    assert_eq!(state.search, SearchState::Inactive);
}

#[test]
fn first_page_selects_first_row() {
    let state = loaded(&[(1, "Rick"), (2, "Morty")]);
    assert_eq!(state.selected_index(), Some(0));
    assert_eq!(selected_name(&state).as_deref(), Some("Rick"));
}

#[test]
fn selection_follows_character_when_filter_changes() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty"), (3, "Summer")]);
    state.select_index(2);

    state.set_search_term("s");

    // Visible: Summer only (Rick and Morty have no 's')
    assert_eq!(selected_name(&state).as_deref(), Some("Summer"));
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn selection_clamps_when_character_filtered_out() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty"), (3, "Summer")]);
    state.select_index(2);

    state.set_search_term("r");

    // Visible: Rick, Morty, Summer all contain 'r'
    assert_eq!(selected_name(&state).as_deref(), Some("Summer"));

    state.set_search_term("mo");
    assert_eq!(selected_name(&state).as_deref(), Some("Morty"));
}

#[test]
fn selection_survives_page_append() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty")]);
    state.select_index(1);
    let request = state.controller_mut().on_scroll_bottom().unwrap();

    state.apply_completion(PageCompletion {
        request,
        outcome: Ok(CharacterPage::from_results(vec![character(3, "Summer")])),
    });

    assert_eq!(selected_name(&state).as_deref(), Some("Morty"));
    assert_eq!(state.visible_len(), 3);
}

#[test]
fn duplicate_ids_keep_index_selection() {
    let mut state = loaded(&[(7, "Birdperson"), (7, "Birdperson"), (8, "Tammy")]);
    state.select_index(1);
    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn toggle_selected_favorite_updates_badge() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty")]);
    state.select_index(1);

    let toggled = state.toggle_selected_favorite();

    assert_eq!(toggled, Some(CharacterId::new(2)));
    assert_eq!(state.favorite_count, 1);
}

#[test]
fn unfavoriting_in_favorites_only_mode_moves_selection() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty"), (3, "Summer")]);
    state.select_index(1);
    state.toggle_selected_favorite();
    state.select_index(2);
    state.toggle_selected_favorite();
    state.toggle_favorites_only();
    assert_eq!(state.visible_len(), 2);
    state.select_index(1);

    state.toggle_selected_favorite();

    assert_eq!(state.visible_len(), 1);
    assert_eq!(selected_name(&state).as_deref(), Some("Morty"));
    assert_eq!(state.favorite_count, 1);
}

#[test]
fn toggle_favorites_only_flips_filter() {
    let mut state = loaded(&[(1, "Rick")]);
    state.toggle_favorites_only();
    assert!(state.controller().filter().favorites_only);
    assert_eq!(state.selected_index(), None);
    state.toggle_favorites_only();
    assert!(!state.controller().filter().favorites_only);
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn failed_load_leaves_badge_and_list() {
    let mut state = loaded(&[(1, "Rick")]);
    let request = state.controller_mut().on_scroll_bottom().unwrap();

    state.apply_completion(PageCompletion {
        request,
        outcome: Err(SourceError::Network("timeout".to_string())),
    });

    assert_eq!(state.visible_len(), 1);
    assert!(!state.controller().is_loading());
    assert_eq!(state.controller().page(), PageCursor::new(2).unwrap());
}

#[test]
fn drain_events_reports_change() {
    let mut state = loaded(&[(1, "Rick")]);
    state.controller_mut().toggle_favorite(&character(1, "Rick"));
    assert!(state.drain_events());
    assert!(!state.drain_events(), "nothing pending");
    assert_eq!(state.favorite_count, 1);
}

#[test]
fn at_bottom_only_on_last_row() {
    let mut state = loaded(&[(1, "Rick"), (2, "Morty")]);
    assert!(!state.at_bottom());
    state.select_index(1);
    assert!(state.at_bottom());
}
