//! # ListingList Component
//!
//! Scrollable view over the row adapter's collection.
//!
//! ## Responsibilities
//!
//! - Render one fixed-height row per record via `RowAdapter::bind_row`
//! - Manage scrolling and keyboard selection
//! - Show the loading/empty placeholder while the list has no rows
//!
//! ## Architecture
//!
//! `ListingList` is a transient component (created each frame) wrapping
//! `&mut ListingListState` (persistent state) and the adapter (props).
//! Event handling lives on the state type, since the component itself does
//! not survive the frame.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::api::thumbs::{Thumbnail, ThumbnailCache};
use crate::api::types::Listing;
use crate::core::adapter::{RowAdapter, RowBinding};
use crate::core::state::LoadPhase;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Every row takes the same vertical space: a bordered block with four
/// content lines (address, price, size + rooms, photo).
pub const ROW_HEIGHT: u16 = 6;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// High-level events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The selected row was activated (Enter).
    Activated(usize),
}

/// Scroll and selection state. Must be persisted in the parent TuiState.
pub struct ListingListState {
    pub scroll_state: ScrollViewState,
    pub selected: usize,
    /// Row count as of the last render, so event handling can clamp
    /// selection without a borrow on the adapter.
    row_count: usize,
    /// Last known viewport height, for page-sized selection jumps.
    viewport_height: u16,
}

impl Default for ListingListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            row_count: 0,
            viewport_height: 0,
        }
    }

    fn rows_per_page(&self) -> usize {
        (self.viewport_height / ROW_HEIGHT).max(1) as usize
    }

    fn select_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
        self.scroll_to_selected();
    }

    fn select_down(&mut self, step: usize) {
        if self.row_count == 0 {
            return;
        }
        self.selected = (self.selected + step).min(self.row_count - 1);
        self.scroll_to_selected();
    }

    /// Adjust the scroll offset so the selected row is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let row_top = self.selected as u16 * ROW_HEIGHT;
        let row_bottom = row_top + ROW_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + self.viewport_height {
            let new_y = row_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

impl EventHandler for ListingListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.select_up(1);
                None
            }
            TuiEvent::CursorDown => {
                self.select_down(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.select_up(self.rows_per_page());
                None
            }
            TuiEvent::ScrollPageDown => {
                self.select_down(self.rows_per_page());
                None
            }
            TuiEvent::Submit if self.row_count > 0 => Some(ListEvent::Activated(self.selected)),
            _ => None,
        }
    }
}

/// Scrollable listings view. Created fresh each frame with references to
/// persistent state and the adapter.
pub struct ListingList<'a> {
    pub state: &'a mut ListingListState,
    pub adapter: &'a RowAdapter<Listing>,
    pub thumbnails: &'a ThumbnailCache,
    pub phase: LoadPhase,
    pub spinner_frame: usize,
}

impl ListingList<'_> {
    fn placeholder_text(&self) -> String {
        match self.phase {
            LoadPhase::Initializing => {
                let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                format!("{glyph} Loading apartments...")
            }
            _ => "No apartments to show".to_string(),
        }
    }
}

impl Component for ListingList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;
        self.state.row_count = self.adapter.len();

        if self.adapter.is_empty() {
            let placeholder = Paragraph::new(self.placeholder_text())
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(Block::bordered());
            frame.render_widget(placeholder, area);
            return;
        }

        if self.state.selected >= self.state.row_count {
            self.state.selected = self.state.row_count - 1;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let canvas_height = self.state.row_count as u16 * ROW_HEIGHT;

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Only rows intersecting the viewport get drawn.
        let offset_y = self.state.scroll_state.offset().y;
        let first = (offset_y / ROW_HEIGHT) as usize;
        let last = ((offset_y + area.height) / ROW_HEIGHT) as usize + 1;

        for i in first..last.min(self.state.row_count) {
            let Some(binding) = self.adapter.bind_row(i) else {
                continue;
            };
            let row_rect = Rect::new(0, i as u16 * ROW_HEIGHT, content_width, ROW_HEIGHT);
            let row = render_row(&binding, self.thumbnails, i == self.state.selected);
            scroll_view.render_widget(row, row_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Builds the widget for one bound row.
fn render_row<'a>(
    binding: &'a RowBinding,
    thumbnails: &ThumbnailCache,
    is_selected: bool,
) -> Paragraph<'a> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let photo = match thumbnails.status(&binding.image_url) {
        Some(Thumbnail::Ready { bytes }) => {
            format!("▣ photo ({} kB)", (bytes / 1024).max(1))
        }
        Some(Thumbnail::Failed) | None => "▨ no photo".to_string(),
        Some(Thumbnail::Pending) => "⧗ photo...".to_string(),
    };

    let lines = vec![
        Line::from(binding.address.as_str()),
        Line::from(Span::styled(
            binding.price_label.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(size_and_rooms_line(binding)),
        Line::from(Span::styled(photo, Style::default().add_modifier(Modifier::DIM))),
    ];

    Paragraph::new(lines).block(
        Block::bordered()
            .title(binding.name.as_str())
            .border_style(border_style)
            .title_style(border_style),
    )
}

/// Size on the left, rooms chip pushed to the right edge of the row.
fn size_and_rooms_line(binding: &RowBinding) -> Vec<Span<'_>> {
    // Inner row width is unknown here, so pad to a fixed column instead;
    // anything wider just flows left-to-right.
    const CHIP_COLUMN: usize = 24;
    let used = binding.size_label.width();
    let pad = CHIP_COLUMN.saturating_sub(used).max(1);
    vec![
        Span::raw(binding.size_label.as_str()),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            format!("[{}]", binding.rooms_chip),
            Style::default().fg(Color::Green),
        ),
    ]
}
