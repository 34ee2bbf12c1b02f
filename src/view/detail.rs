//! Detail panel for the selected character.

use super::constants::FAVORITE_STAR;
use super::styles::{ListStyles, MUTED_TEXT};
use crate::model::Character;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Label column width so values line up.
const LABEL_WIDTH: usize = 10;

fn field_line<'a>(label: &'a str, value: impl Into<Span<'a>>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), MUTED_TEXT),
        value.into(),
    ])
}

/// Read-only view of every known field of a character.
pub struct DetailPanel<'a> {
    character: Option<&'a Character>,
    favorite: bool,
    styles: ListStyles,
}

impl<'a> DetailPanel<'a> {
    /// Panel for `character`, or an empty panel when nothing is selected.
    pub fn new(character: Option<&'a Character>, favorite: bool, styles: ListStyles) -> Self {
        Self {
            character,
            favorite,
            styles,
        }
    }

    fn lines(&self, character: &'a Character) -> Vec<Line<'a>> {
        let mut title = vec![Span::styled(
            character.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.favorite {
            title.push(Span::raw(" "));
            title.push(Span::styled(FAVORITE_STAR, self.styles.favorite_marker()));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(""),
            field_line("ID", character.id.to_string()),
            field_line(
                "Status",
                Span::styled(
                    character.status.label(),
                    self.styles.style_for_status(character.status),
                ),
            ),
        ];

        if !character.species.is_empty() {
            lines.push(field_line("Species", character.species.as_str()));
        }
        if !character.kind.is_empty() {
            lines.push(field_line("Type", character.kind.as_str()));
        }
        if !character.gender.is_empty() {
            lines.push(field_line("Gender", character.gender.as_str()));
        }
        if let Some(origin) = character.origin.as_ref().filter(|o| !o.name.is_empty()) {
            lines.push(field_line("Origin", origin.name.as_str()));
        }
        if let Some(location) = character.location.as_ref().filter(|l| !l.name.is_empty()) {
            lines.push(field_line("Location", location.name.as_str()));
        }
        if !character.episode.is_empty() {
            lines.push(field_line("Episodes", character.episode.len().to_string()));
        }
        if let Some(created) = character.created {
            lines.push(field_line("Created", created.format("%Y-%m-%d").to_string()));
        }
        if let Some(image) = character.image.as_deref() {
            lines.push(field_line("Image", image));
        }
        if !character.extra.is_empty() {
            let keys: Vec<&str> = character.extra.keys().map(String::as_str).collect();
            lines.push(field_line("Other", keys.join(", ")));
        }

        lines
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");

        let lines = match self.character {
            Some(character) => self.lines(character),
            None => vec![Line::styled("Nothing selected", MUTED_TEXT)],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CharacterStatus, NamedResource};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(panel: DetailPanel<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(panel, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_panel_says_nothing_selected() {
        let text = render(DetailPanel::new(None, false, ListStyles::default()));
        assert!(text.contains("Nothing selected"));
    }

    #[test]
    fn shows_known_fields() {
        let mut rick = Character::new(1, "Rick Sanchez")
            .with_status(CharacterStatus::Alive)
            .with_species("Human");
        rick.gender = "Male".to_string();
        rick.origin = Some(NamedResource {
            name: "Earth (C-137)".to_string(),
            url: String::new(),
        });
        rick.episode = vec!["e1".to_string(), "e2".to_string(), "e3".to_string()];

        let text = render(DetailPanel::new(Some(&rick), true, ListStyles::default()));

        assert!(text.contains("Rick Sanchez ★"));
        assert!(text.contains("Alive"));
        assert!(text.contains("Human"));
        assert!(text.contains("Male"));
        assert!(text.contains("Earth (C-137)"));
        assert!(text.contains("Episodes  3"));
    }

    #[test]
    fn lists_extra_field_names() {
        let mut morty = Character::new(2, "Morty Smith");
        morty
            .extra
            .insert("catchphrase".to_string(), serde_json::json!("Aw geez"));

        let text = render(DetailPanel::new(Some(&morty), false, ListStyles::default()));

        assert!(text.contains("catchphrase"));
        assert!(!text.contains("★"));
    }
}
