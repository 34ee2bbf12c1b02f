//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, card list, detail panel,
//! optional search bar and status bar, then renders each piece from state.

use super::card_list::CardList;
use super::constants::{
    FAVORITE_STAR, HEADER_HEIGHT, LIST_WIDTH_PERCENT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::detail::DetailPanel;
use super::help::render_help_overlay;
use super::search_input::SearchInput;
use super::styles::{ListStyles, MUTED_TEXT};
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenAreas {
    pub header: Rect,
    pub list: Rect,
    pub detail: Rect,
    pub search: Option<Rect>,
    pub status: Rect,
}

/// Split the frame. The search bar only takes space while typing.
pub(crate) fn calculate_areas(area: Rect, search_visible: bool) -> ScreenAreas {
    let search_height = if search_visible { SEARCH_INPUT_HEIGHT } else { 0 };

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(search_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
        ])
        .split(vertical[1]);

    ScreenAreas {
        header: vertical[0],
        list: body[0],
        detail: body[1],
        search: search_visible.then_some(vertical[2]),
        status: vertical[3],
    }
}

/// Rows of characters that fit in the list area (inside its border).
pub(crate) fn list_viewport_rows(area: Rect, search_visible: bool) -> usize {
    let list = calculate_areas(area, search_visible).list;
    usize::from(list.height.saturating_sub(2))
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: ListStyles) {
    let areas = calculate_areas(frame.area(), state.search.is_typing());

    render_header(frame, areas.header, state, styles);
    frame.render_widget(CardList::new(state, styles), areas.list);

    let selected = state.selected_character();
    let favorite = selected.is_some_and(|c| state.controller().is_favorite(c));
    frame.render_widget(DetailPanel::new(selected, favorite, styles), areas.detail);

    if let Some(search_area) = areas.search {
        frame.render_widget(
            SearchInput::new(&state.search, styles.colored()),
            search_area,
        );
    }

    render_status_bar(frame, areas.status, state);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// Header: title, filter summary and the favorite badge on the right.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: ListStyles) {
    let filter = state.controller().filter();

    let mut spans = vec![Span::styled(
        " Characters",
        Style::default().fg(Color::Cyan),
    )];
    if filter.favorites_only {
        spans.push(Span::styled(" | favorites only", MUTED_TEXT));
    }
    if !filter.search_term.is_empty() {
        spans.push(Span::styled(
            format!(" | name contains \"{}\"", filter.search_term),
            MUTED_TEXT,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let badge = Line::from(Span::styled(
        format!(" {FAVORITE_STAR} {} ", state.favorite_count),
        styles.badge(),
    ));
    frame.render_widget(Paragraph::new(badge).alignment(Alignment::Right), area);
}

/// Status bar: page cursor, counts, load indicator and the help hint.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let controller = state.controller();

    let mut status = format!(
        " page {} · {} loaded · {} shown",
        controller.page(),
        controller.characters().len(),
        state.visible_len()
    );
    if controller.is_loading() {
        status.push_str(" · Loading…");
    } else if controller.reached_end() {
        status.push_str(" · end of list");
    }

    frame.render_widget(
        Paragraph::new(Line::from(status)).style(Style::default().fg(Color::Gray)),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("? help  q quit ", MUTED_TEXT)).alignment(Alignment::Right),
        area,
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
