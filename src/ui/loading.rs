use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

/// Placeholder shown while a fetch is outstanding.
pub struct LoadingView<'a> {
    username: &'a str,
}

impl<'a> LoadingView<'a> {
    pub fn new(username: &'a str) -> Self {
        Self { username }
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(row) = super::message_row(area) else {
            return;
        };

        let line = Line::styled(
            format!("Loading @{}…", self.username),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        Paragraph::new(line).render(row, buf);
    }
}
