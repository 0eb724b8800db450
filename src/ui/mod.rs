pub mod error_line;
pub mod loading;
pub mod profile;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::ViewState;

use error_line::ErrorLine;
use loading::LoadingView;
use profile::ProfileCard;

/// Draw the single screen. Output depends on `state` alone.
pub fn draw(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();

    if state.loading {
        frame.render_widget(LoadingView::new(&state.username), area);
        return;
    }

    // An error replaces the card entirely so stale fields never show.
    if let Some(ref error) = state.last_error {
        frame.render_widget(ErrorLine::new(error), area);
        return;
    }

    match state.record {
        Some(ref record) => frame.render_widget(ProfileCard::new(record), area),
        None => frame.render_widget(LoadingView::new(&state.username), area),
    }
}

/// Row for a one-line message: indented one row and two columns when there
/// is room, otherwise the top-left of `area`.
fn message_row(area: Rect) -> Option<Rect> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let y = if area.height >= 2 { area.y + 1 } else { area.y };
    let indent = if area.width > 2 { 2 } else { 0 };
    Some(Rect::new(area.x + indent, y, area.width - indent, 1))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::state::ViewState;

    /// Render `state` into an in-memory terminal and return its rows.
    pub fn render_rows(state: &ViewState, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| super::draw(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_support::render_rows;
    use crate::api::types::ProfileRecord;
    use crate::state::ViewState;

    fn record() -> ProfileRecord {
        ProfileRecord {
            login: "barkhaaroraa".into(),
            name: "Barkha Arora".into(),
            bio: String::new(),
            followers: 10,
            public_repos: 5,
            html_url: "https://github.com/barkhaaroraa".into(),
            avatar_url: String::new(),
        }
    }

    fn non_empty(rows: &[String]) -> Vec<&str> {
        rows.iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .collect()
    }

    #[test]
    fn loading_hides_previous_content() {
        let state = ViewState {
            username: "barkhaaroraa".into(),
            loading: true,
            record: Some(record()),
            last_error: Some(Arc::new("old failure".into())),
            request_seq: 2,
        };
        let rows = render_rows(&state, 60, 12);
        let text = rows.join("\n");
        assert!(!text.contains("Barkha Arora"));
        assert!(!text.contains("old failure"));
        assert!(text.contains("Loading @barkhaaroraa"));
    }

    #[test]
    fn error_is_a_single_line_without_stale_fields() {
        let state = ViewState {
            username: "barkhaaroraa".into(),
            loading: false,
            record: Some(record()),
            last_error: Some(Arc::new("HTTP error: connection refused".into())),
            request_seq: 2,
        };
        let rows = render_rows(&state, 80, 12);
        let lines = non_empty(&rows);
        assert_eq!(lines, vec!["Error: HTTP error: connection refused"]);
    }

    #[test]
    fn success_shows_card() {
        let state = ViewState {
            username: "barkhaaroraa".into(),
            loading: false,
            record: Some(record()),
            last_error: None,
            request_seq: 1,
        };
        let text = render_rows(&state, 80, 16).join("\n");
        assert!(text.contains("Barkha Arora (barkhaaroraa)"));
        assert!(text.contains("Bio:  —"));
        assert!(text.contains("Repos: 5"));
        assert!(text.contains("Followers: 10"));
        assert!(text.contains("Profile: https://github.com/barkhaaroraa"));
        assert!(text.contains("[r] refresh"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn one_row_terminal_still_shows_error() {
        let state = ViewState {
            username: "barkhaaroraa".into(),
            loading: false,
            record: None,
            last_error: Some(Arc::new("request timed out".into())),
            request_seq: 1,
        };
        let rows = render_rows(&state, 40, 1);
        assert_eq!(rows, vec!["  Error: request timed out"]);
    }

    #[test]
    fn one_row_terminal_still_shows_loading() {
        let (state, _) = ViewState::init("octocat");
        let rows = render_rows(&state, 40, 1);
        assert_eq!(rows, vec!["  Loading @octocat…"]);
    }

    #[test]
    fn message_row_placement() {
        use ratatui::layout::Rect;

        assert_eq!(
            super::message_row(Rect::new(0, 0, 20, 5)),
            Some(Rect::new(2, 1, 18, 1))
        );
        assert_eq!(
            super::message_row(Rect::new(0, 0, 20, 1)),
            Some(Rect::new(2, 0, 18, 1))
        );
        assert_eq!(
            super::message_row(Rect::new(0, 0, 2, 1)),
            Some(Rect::new(0, 0, 2, 1))
        );
        assert_eq!(super::message_row(Rect::new(0, 0, 0, 1)), None);
    }

    #[test]
    fn rendering_is_deterministic() {
        let state = ViewState {
            username: "barkhaaroraa".into(),
            loading: false,
            record: Some(record()),
            last_error: None,
            request_seq: 1,
        };
        assert_eq!(render_rows(&state, 70, 14), render_rows(&state, 70, 14));
    }
}
