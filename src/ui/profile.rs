use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::api::types::ProfileRecord;

const BIO_PLACEHOLDER: &str = "—";

/// Profile card: name, bio, counts, URL and the key footer.
pub struct ProfileCard<'a> {
    pub record: &'a ProfileRecord,
}

impl<'a> ProfileCard<'a> {
    pub fn new(record: &'a ProfileRecord) -> Self {
        Self { record }
    }

    fn heading(&self) -> Line<'a> {
        let name_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        if self.record.name.is_empty() {
            return Line::from(Span::styled(self.record.login.as_str(), name_style));
        }
        Line::from(vec![
            Span::styled(self.record.name.as_str(), name_style),
            Span::styled(
                format!(" ({})", self.record.login),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" @{} ", self.record.login))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let [info_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let label_style = Style::default().fg(Color::DarkGray);
        let value_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let bio = if self.record.bio.is_empty() {
            BIO_PLACEHOLDER
        } else {
            self.record.bio.as_str()
        };

        let lines = vec![
            self.heading(),
            Line::from(""),
            Line::from(vec![Span::styled("Bio:  ", label_style), Span::raw(bio)]),
            Line::from(vec![
                Span::styled("Repos: ", label_style),
                Span::styled(self.record.public_repos.to_string(), value_style),
                Span::styled("   Followers: ", label_style),
                Span::styled(self.record.followers.to_string(), value_style),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Profile: ", label_style),
                Span::styled(
                    self.record.html_url.as_str(),
                    Style::default().fg(Color::Blue),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(info_area, buf);

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let footer = Line::from(vec![
            Span::styled("[r]", key_style),
            Span::styled(" refresh   ", label_style),
            Span::styled("[q]", key_style),
            Span::styled(" quit", label_style),
        ]);
        Paragraph::new(footer).render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(record: &ProfileRecord) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(ProfileCard::new(record), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_bio_when_present() {
        let record = ProfileRecord {
            login: "octocat".into(),
            name: "The Octocat".into(),
            bio: "mascot".into(),
            followers: 3,
            public_repos: 8,
            html_url: "https://github.com/octocat".into(),
            avatar_url: String::new(),
        };
        let text = render(&record);
        assert!(text.contains("Bio:  mascot"));
        assert!(!text.contains(BIO_PLACEHOLDER));
        assert!(text.contains("Repos: 8   Followers: 3"));
        assert!(text.contains("@octocat"));
    }

    #[test]
    fn falls_back_to_login_without_name() {
        let record = ProfileRecord {
            login: "octocat".into(),
            ..ProfileRecord::default()
        };
        let text = render(&record);
        assert!(text.contains("octocat"));
        assert!(!text.contains("()"));
        assert!(text.contains("Bio:  —"));
    }
}
