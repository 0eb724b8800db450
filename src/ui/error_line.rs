use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// One-line fetch error, shown in place of the profile card.
pub struct ErrorLine<'a> {
    text: &'a str,
}

impl<'a> ErrorLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for ErrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(row) = super::message_row(area) else {
            return;
        };

        // Decode errors can embed a multi-line body.
        let message = self.text.split_whitespace().collect::<Vec<_>>().join(" ");

        let line = Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(Color::Red)),
        ]);

        Paragraph::new(line).render(row, buf);
    }
}
