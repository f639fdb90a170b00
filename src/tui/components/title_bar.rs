//! # TitleBar Component
//!
//! Top bar showing the app name, the listing count or load status, and the
//! current notice when one is up.
//!
//! Purely presentational — it receives everything as props, so it is
//! trivial to test: build it, render into a TestBackend, check the text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top status bar.
///
/// # Props
///
/// - `status`: load-phase summary (e.g. "Loading...", "3 apartments")
/// - `notice`: transient toast text, highlighted while present
pub struct TitleBar {
    pub status: String,
    pub notice: Option<String>,
}

impl TitleBar {
    pub fn new(status: String, notice: Option<String>) -> Self {
        Self { status, notice }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!("Butai | {}", self.status))];
        if let Some(ref notice) = self.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                notice.clone(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
