//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the search bar when in Typing state.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    colored: bool,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, colored: bool) -> Self {
        Self {
            search_state,
            colored,
        }
    }

    fn cursor_style(&self) -> Style {
        if self.colored {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let SearchState::Typing { query, cursor } = self.search_state else {
            return;
        };

        let before: String = query.chars().take(*cursor).collect();
        let mut after = query.chars().skip(*cursor);
        // Cursor past the end shows as a blank cell
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
        let after_text: String = after.collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.cursor_style()),
            Span::raw(after_text),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search by name ");

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &SearchState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(SearchInput::new(state, true), frame.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area().width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn typing_state_shows_query_and_title() {
        let state = SearchState::Typing {
            query: "rick".to_string(),
            cursor: 4,
        };
        let buffer = render(&state);

        assert!(row(&buffer, 0).contains("Search by name"));
        assert!(row(&buffer, 1).contains("rick"));
    }

    #[test]
    fn cursor_cell_is_highlighted() {
        let state = SearchState::Typing {
            query: "rick".to_string(),
            cursor: 1,
        };
        let buffer = render(&state);

        // Border at x=0, query starts at x=1; cursor sits on 'i'
        let cell = &buffer[(2, 1)];
        assert_eq!(cell.symbol(), "i");
        assert_eq!(cell.bg, Color::White);
    }

    #[test]
    fn inactive_renders_nothing() {
        let buffer = render(&SearchState::Inactive);
        assert_eq!(row(&buffer, 1).trim(), "");
    }
}
