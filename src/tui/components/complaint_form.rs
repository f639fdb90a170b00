//! # ComplaintForm Component
//!
//! Free-text compose box for the complaint screen. Holds its own buffer
//! and emits a high-level event when the user submits; what happens to the
//! text is the reducer's business.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplaintEvent {
    /// User submitted the complaint text (Enter).
    Submit(String),
}

pub struct ComplaintForm {
    pub buffer: String,
}

impl Default for ComplaintForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplaintForm {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl EventHandler for ComplaintForm {
    type Event = ComplaintEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                let text = self.buffer.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                self.clear();
                Some(ComplaintEvent::Submit(text))
            }
            _ => None,
        }
    }
}

impl Component for ComplaintForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Block cursor at the end of the buffer
        let shown = format!("{}█", self.buffer);
        let paragraph = Paragraph::new(shown)
            .block(
                Block::bordered()
                    .title("Write complaint")
                    .title_bottom("Enter — submit | Ctrl+J — newline | Esc — cancel")
                    .title_style(Style::default().add_modifier(Modifier::DIM)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
