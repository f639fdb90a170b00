//! Frame layout: title bar on top, the active screen in the middle, the
//! navigation bar at the bottom. The filter dialog overlays the body when
//! open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, LoadPhase, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, ListingList, NavBar, ProfileView, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, body_area, nav_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let status = match app.phase {
        LoadPhase::Initializing => "Loading...".to_string(),
        LoadPhase::IdleWithData => format!("{} apartments", app.adapter.len()),
        LoadPhase::IdleEmpty => "No apartments".to_string(),
        LoadPhase::ErrorShown => "Load failed".to_string(),
    };
    let notice = app.notice.as_ref().map(|n| n.text.clone());
    TitleBar::new(status, notice).render(frame, title_area);

    match &app.route {
        Route::Listings => {
            let mut list = ListingList {
                state: &mut tui.listing_list,
                adapter: &app.adapter,
                thumbnails: &app.thumbnails,
                phase: app.phase,
                spinner_frame,
            };
            list.render(frame, body_area);
        }
        Route::Detail(payload) => {
            let mut view = DetailView {
                payload,
                thumbnails: &app.thumbnails,
            };
            view.render(frame, body_area);
        }
        Route::Complaint => tui.complaint_form.render(frame, body_area),
        Route::Profile => {
            let mut view = ProfileView {
                profile: &app.profile,
            };
            view.render(frame, body_area);
        }
    }

    if let Some(ref mut dialog) = tui.filter_dialog {
        dialog.render(frame, body_area);
    }

    NavBar::new(&app.route).render(frame, nav_area);
}
