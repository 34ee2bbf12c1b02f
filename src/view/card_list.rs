//! Card list widget: the scrollable list of visible characters.

use super::constants::{FAVORITE_STAR, NOT_FAVORITE_STAR};
use super::styles::{ListStyles, MUTED_TEXT};
use crate::model::Character;
use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Width reserved for the name column.
const NAME_COLUMN_WIDTH: usize = 28;

/// Truncate or pad `text` to exactly `width` terminal columns.
///
/// Truncated text ends with `…`.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();

    if total <= width {
        out.push_str(text);
        used = total;
    } else if width > 0 {
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        used += 1;
    }

    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// One row of the list.
fn card_line<'a>(character: &'a Character, favorite: bool, styles: &ListStyles) -> Line<'a> {
    let (star, star_style) = if favorite {
        (FAVORITE_STAR, styles.favorite_marker())
    } else {
        (NOT_FAVORITE_STAR, MUTED_TEXT)
    };

    let mut spans = vec![
        Span::styled(star, star_style),
        Span::raw(" "),
        Span::raw(fit_width(&character.name, NAME_COLUMN_WIDTH)),
        Span::raw(" "),
        Span::styled(
            character.status.label(),
            styles.style_for_status(character.status),
        ),
    ];
    if !character.species.is_empty() {
        spans.push(Span::styled(" · ", MUTED_TEXT));
        spans.push(Span::raw(character.species.as_str()));
    }

    Line::from(spans)
}

/// Scrollable list of the characters currently visible.
pub struct CardList<'a> {
    state: &'a AppState,
    styles: ListStyles,
}

impl<'a> CardList<'a> {
    /// Create a card list over the app state.
    pub fn new(state: &'a AppState, styles: ListStyles) -> Self {
        Self { state, styles }
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controller = self.state.controller();
        let visible = controller.visible();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(if controller.filter().favorites_only {
                " Favorites "
            } else {
                " Characters "
            });

        if visible.is_empty() {
            let message = if controller.is_loading() && controller.characters().is_empty() {
                "Loading…"
            } else {
                "No characters found"
            };
            Paragraph::new(Line::styled(message, MUTED_TEXT))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|c| ListItem::new(card_line(c, controller.is_favorite(c), &self.styles)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.styles.selected())
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(self.state.selected_index());
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
