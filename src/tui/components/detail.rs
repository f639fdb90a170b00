//! # Detail Component
//!
//! Full-record view for one listing. The route carries the whole record as
//! payload, so this screen works even if the list has moved on underneath.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::thumbs::{Thumbnail, ThumbnailCache};
use crate::core::state::DetailPayload;
use crate::tui::component::Component;

pub struct DetailView<'a> {
    pub payload: &'a DetailPayload,
    pub thumbnails: &'a ThumbnailCache,
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let listing = &self.payload.listing;
        let label = Style::default().add_modifier(Modifier::DIM);

        let photo_line = match &self.payload.photo {
            Some(url) => match self.thumbnails.status(url.as_str()) {
                Some(Thumbnail::Ready { bytes }) => {
                    format!("▣ {} ({} kB)", url, (bytes / 1024).max(1))
                }
                Some(Thumbnail::Pending) => format!("⧗ {url}"),
                Some(Thumbnail::Failed) | None => "▨ photo unavailable".to_string(),
            },
            None => "▨ photo unavailable".to_string(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Address  ", label),
                Span::raw(listing.address.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Price    ", label),
                Span::styled(
                    format!("{} per night", listing.price_per_night),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::styled("Size     ", label),
                Span::raw(format!("{}", listing.size)),
            ]),
            Line::from(vec![
                Span::styled("Rooms    ", label),
                Span::styled(
                    format!("{} kambariai", listing.rooms),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(photo_line, label)),
            Line::from(""),
            Line::from(Span::styled("Esc — back to list", label)),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title(listing.name.as_str()))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
