//! # FilterDialog Component
//!
//! Modal overlay for filter criteria. Hidden = `None` in TuiState; while
//! open, all events route here first (same overlay pattern as any modal in
//! this app). Emits `Apply` with the parsed criteria or `Dismiss`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::core::state::FilterCriteria;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const FIELD_LABELS: [&str; 3] = ["Min price", "Max price", "Min rooms"];

/// High-level events emitted by the dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Apply(FilterCriteria),
    Dismiss,
}

pub struct FilterDialogState {
    /// One text field per criterion, in FIELD_LABELS order.
    fields: [String; 3],
    focus: usize,
}

impl FilterDialogState {
    /// Opens pre-filled with the previously stored criteria.
    pub fn new(criteria: &FilterCriteria) -> Self {
        let show = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            fields: [
                show(criteria.min_price),
                show(criteria.max_price),
                show(criteria.min_rooms),
            ],
            focus: 0,
        }
    }

    fn criteria(&self) -> FilterCriteria {
        let parse = |s: &String| s.parse::<u32>().ok();
        FilterCriteria {
            min_price: parse(&self.fields[0]),
            max_price: parse(&self.fields[1]),
            min_rooms: parse(&self.fields[2]),
        }
    }
}

impl EventHandler for FilterDialogState {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(FilterEvent::Dismiss),
            TuiEvent::Submit => Some(FilterEvent::Apply(self.criteria())),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % self.fields.len();
                None
            }
            TuiEvent::CursorUp => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                None
            }
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                self.fields[self.focus].push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.fields[self.focus].pop();
                None
            }
            _ => None,
        }
    }
}

impl Component for FilterDialogState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = 36.min(area.width);
        let height = 7.min(area.height);
        let dialog = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let mut lines = Vec::new();
        for (i, label) in FIELD_LABELS.iter().enumerate() {
            let focused = i == self.focus;
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{label:<10}"), Style::default().add_modifier(Modifier::DIM)),
                Span::styled(self.fields[i].clone(), value_style),
                Span::styled(if focused { "█" } else { "" }, value_style),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter — apply | Esc — close",
            Style::default().add_modifier(Modifier::DIM),
        )));

        frame.render_widget(Clear, dialog);
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Filter")),
            dialog,
        );
    }
}
