//! # NavBar Component
//!
//! Bottom navigation bar. Two entries: the apartments list and the
//! complaint screen. The entry for the screen currently on top renders
//! dimmed — selecting it is a no-op, the list entry in particular is
//! disabled while the list itself is active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Route;
use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub route: &'a Route,
}

impl<'a> NavBar<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    fn entry(label: &str, active: bool) -> Span<'_> {
        if active {
            // Active screen: its nav entry is disabled
            Span::styled(label.to_string(), Style::default().add_modifier(Modifier::DIM))
        } else {
            Span::styled(label.to_string(), Style::default().fg(Color::Cyan))
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let on_list = *self.route == Route::Listings;
        let on_complaint = *self.route == Route::Complaint;

        let line = Line::from(vec![
            Self::entry("[1] Apartments", on_list),
            Span::raw("   "),
            Self::entry("[2] Write complaint", on_complaint),
            Span::raw("   "),
            Span::styled(
                "[f] Filter  [p] Profile  [q] Quit",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
