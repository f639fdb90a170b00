//! # ProfileView Component
//!
//! Read-only account details from the `[profile]` config section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::ProfileInfo;
use crate::tui::component::Component;

pub struct ProfileView<'a> {
    pub profile: &'a ProfileInfo,
}

impl Component for ProfileView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Style::default().add_modifier(Modifier::DIM);
        let field = |value: &Option<String>| {
            value.clone().unwrap_or_else(|| "(not set)".to_string())
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Username  ", label),
                Span::raw(field(&self.profile.username)),
            ]),
            Line::from(vec![
                Span::styled("Email     ", label),
                Span::raw(field(&self.profile.email)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Esc — back to list", label)),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Profile")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(profile: &ProfileInfo) -> String {
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut view = ProfileView { profile };
                view.render(f, f.area());
            })
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
    fn test_profile_shows_config_values() {
        let profile = ProfileInfo {
            username: Some("jonas".to_string()),
            email: Some("jonas@example.com".to_string()),
        };
        let text = draw(&profile);
        assert!(text.contains("jonas"));
        assert!(text.contains("jonas@example.com"));
    }

    #[test]
    fn test_profile_placeholder_when_unset() {
        let text = draw(&ProfileInfo::default());
        assert!(text.contains("(not set)"));
    }
}
