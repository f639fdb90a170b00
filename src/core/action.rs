//! # Actions
//!
//! Everything that can happen on the listings screen becomes an `Action`.
//! The fetch lands? That's `Action::ListingsLoaded(records)`. The user taps
//! a row? That's `Action::RowActivated(position)`.
//!
//! `update()` applies one action to the state and returns an [`Effect`] for
//! the I/O shell to run. No side effects in here beyond logging — network
//! and terminal work happen in the `tui` event loop.
//!
//! ```text
//! &mut App + Action  →  update()  →  Effect
//! ```

use log::{debug, info, warn};

use crate::api::provider::FetchError;
use crate::api::types::Listing;
use crate::core::state::{App, FilterCriteria, LoadPhase, Route};

/// Bottom navigation entries. A closed set — adding an entry forces every
/// match over it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    ApartmentsList,
    WriteComplaint,
}

/// Toolbar menu entries, same closed-set treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Filter,
    Profile,
}

#[derive(Debug)]
pub enum Action {
    /// Activation (or a later screen re-entry) asking for the listings.
    FetchRequested,
    /// The fetch task finished with records, in response order.
    ListingsLoaded(Vec<Listing>),
    /// The fetch task finished with a failure.
    FetchFailed(FetchError),
    /// Row tap at a list position.
    RowActivated(usize),
    NavSelected(NavTarget),
    MenuSelected(MenuAction),
    /// Complaint compose screen finished with the given text.
    ComplaintSubmitted(String),
    /// Filter dialog closed with Apply.
    FilterApplied(FilterCriteria),
    /// One photo load finished. `Ok` carries the payload size.
    ThumbnailResolved { url: String, outcome: Result<usize, ()> },
    /// Leave the current screen back to the list.
    Back,
    Quit,
}

/// What the event loop has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the background fetch task.
    SpawnFetch,
    /// Spawn fire-and-forget photo loads for these URLs.
    SpawnThumbnails(Vec<String>),
    /// Open the filter overlay (presentation state, owned by the TUI).
    OpenFilterDialog,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchRequested => {
            if app.fetch_in_flight {
                debug!("Fetch already in flight, dropping request");
                return Effect::None;
            }
            app.fetch_in_flight = true;
            Effect::SpawnFetch
        }

        Action::ListingsLoaded(records) => {
            app.fetch_in_flight = false;
            info!("Fetch completed with {} records", records.len());
            if records.is_empty() {
                if app.adapter.is_empty() {
                    app.phase = LoadPhase::IdleEmpty;
                }
                return Effect::None;
            }

            let mut to_load = Vec::new();
            for record in records {
                if app.thumbnails.request(&record.image_url) {
                    to_load.push(record.image_url.clone());
                }
                app.adapter.add_item(record);
            }
            app.phase = LoadPhase::IdleWithData;
            Effect::SpawnThumbnails(to_load)
        }

        Action::FetchFailed(err) => {
            app.fetch_in_flight = false;
            warn!("Fetch failed: {err}");
            if app.adapter.is_empty() {
                app.phase = match err {
                    FetchError::NoContent => LoadPhase::IdleEmpty,
                    _ => LoadPhase::ErrorShown,
                };
            }
            app.show_notice(err.to_string());
            Effect::None
        }

        Action::RowActivated(position) => {
            if app.route != Route::Listings {
                return Effect::None;
            }
            let Some(listing) = app.adapter.item(position) else {
                debug!("Row {position} activated past end of list");
                return Effect::None;
            };
            match Route::detail(listing) {
                Ok(route) => app.route = route,
                // Recovered path: the user sees no navigation, nothing else.
                Err(e) => warn!("Could not open detail view: {e}"),
            }
            Effect::None
        }

        Action::NavSelected(target) => {
            match target {
                // Disabled while the list is the active screen.
                NavTarget::ApartmentsList => {
                    if app.route != Route::Listings {
                        app.route = Route::Listings;
                    }
                }
                NavTarget::WriteComplaint => app.route = Route::Complaint,
            }
            Effect::None
        }

        Action::MenuSelected(menu) => match menu {
            MenuAction::Filter => Effect::OpenFilterDialog,
            MenuAction::Profile => {
                app.route = Route::Profile;
                Effect::None
            }
        },

        Action::ComplaintSubmitted(text) => {
            info!("Complaint submitted ({} chars)", text.len());
            app.route = Route::Listings;
            app.show_notice("Complaint submitted");
            Effect::None
        }

        Action::FilterApplied(criteria) => {
            debug!("Filter criteria stored: {criteria:?}");
            app.filter = criteria;
            Effect::None
        }

        Action::ThumbnailResolved { url, outcome } => {
            app.thumbnails.resolve(&url, outcome);
            Effect::None
        }

        Action::Back => {
            app.route = Route::Listings;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::thumbs::Thumbnail;
    use crate::test_support::{sample_listing, test_app};

    fn sample_batch(n: usize) -> Vec<Listing> {
        (0..n)
            .map(|i| {
                let mut listing = sample_listing();
                listing.name = format!("Flat {i}");
                listing.image_url = format!("https://img.example/{i}.jpg");
                listing
            })
            .collect()
    }

    #[test]
    fn test_fetch_request_sets_guard() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::FetchRequested), Effect::SpawnFetch);
        assert!(app.fetch_in_flight);
    }

    #[test]
    fn test_second_fetch_request_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        assert_eq!(update(&mut app, Action::FetchRequested), Effect::None);
    }

    #[test]
    fn test_loaded_records_append_in_order() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        update(&mut app, Action::ListingsLoaded(sample_batch(3)));

        assert_eq!(app.phase, LoadPhase::IdleWithData);
        assert!(!app.fetch_in_flight);
        assert_eq!(app.adapter.len(), 3);
        assert_eq!(app.adapter.item(0).unwrap().name, "Flat 0");
        assert_eq!(app.adapter.item(2).unwrap().name, "Flat 2");
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_loaded_records_request_each_thumbnail_once() {
        let mut app = test_app();
        let mut batch = sample_batch(2);
        batch.push(batch[0].clone()); // duplicate photo URL
        let effect = update(&mut app, Action::ListingsLoaded(batch));
        assert_eq!(
            effect,
            Effect::SpawnThumbnails(vec![
                "https://img.example/0.jpg".to_string(),
                "https://img.example/1.jpg".to_string(),
            ])
        );
    }

    #[test]
    fn test_empty_success_is_quietly_empty() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        update(&mut app, Action::ListingsLoaded(Vec::new()));
        assert_eq!(app.phase, LoadPhase::IdleEmpty);
        assert_eq!(app.adapter.len(), 0);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_no_content_yields_zero_rows_and_one_notice() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        update(&mut app, Action::FetchFailed(FetchError::NoContent));

        assert_eq!(app.phase, LoadPhase::IdleEmpty);
        assert_eq!(app.adapter.len(), 0);
        let notice = app.notice.as_ref().expect("notice should be shown");
        assert_eq!(notice.text, "Could not load any apartments");
    }

    #[test]
    fn test_http_404_surfaces_server_message() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        update(
            &mut app,
            Action::FetchFailed(FetchError::Http {
                status: 404,
                message: "Not Found".to_string(),
            }),
        );

        assert_eq!(app.phase, LoadPhase::ErrorShown);
        assert_eq!(app.adapter.len(), 0);
        assert!(app.notice.as_ref().unwrap().text.contains("Not Found"));
    }

    #[test]
    fn test_timeout_surfaces_transport_message() {
        let mut app = test_app();
        update(&mut app, Action::FetchRequested);
        update(
            &mut app,
            Action::FetchFailed(FetchError::Transport(
                "operation timed out".to_string(),
            )),
        );

        assert_eq!(app.phase, LoadPhase::ErrorShown);
        assert_eq!(app.adapter.len(), 0);
        assert!(app.notice.as_ref().unwrap().text.contains("timed out"));
    }

    #[test]
    fn test_failure_after_data_keeps_collection() {
        let mut app = test_app();
        update(&mut app, Action::ListingsLoaded(sample_batch(2)));
        update(
            &mut app,
            Action::FetchFailed(FetchError::Transport("connection reset".to_string())),
        );
        // The collection reflects the successful appends so far.
        assert_eq!(app.adapter.len(), 2);
        assert_eq!(app.phase, LoadPhase::IdleWithData);
    }

    #[test]
    fn test_row_activation_opens_detail_with_payload() {
        let mut app = test_app();
        update(&mut app, Action::ListingsLoaded(sample_batch(2)));
        update(&mut app, Action::RowActivated(1));

        match &app.route {
            Route::Detail(payload) => assert_eq!(payload.listing.name, "Flat 1"),
            other => panic!("expected detail route, got {other:?}"),
        }
    }

    #[test]
    fn test_row_activation_with_bad_payload_is_swallowed() {
        let mut app = test_app();
        let mut listing = sample_listing();
        listing.image_url = "::not a url::".to_string();
        update(&mut app, Action::ListingsLoaded(vec![listing]));
        update(&mut app, Action::RowActivated(0));
        // Navigation construction failed: logged, no route change, no crash.
        assert_eq!(app.route, Route::Listings);
        assert_eq!(app.adapter.len(), 1);
    }

    #[test]
    fn test_row_activation_past_end_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::RowActivated(7));
        assert_eq!(app.route, Route::Listings);
    }

    #[test]
    fn test_self_nav_entry_is_a_no_op() {
        let mut app = test_app();
        update(&mut app, Action::NavSelected(NavTarget::ApartmentsList));
        assert_eq!(app.route, Route::Listings);
        assert_eq!(app.phase, LoadPhase::Initializing);
    }

    #[test]
    fn test_write_complaint_navigates_regardless_of_list_state() {
        // Empty list
        let mut app = test_app();
        update(&mut app, Action::NavSelected(NavTarget::WriteComplaint));
        assert_eq!(app.route, Route::Complaint);

        // Populated list
        let mut app = test_app();
        update(&mut app, Action::ListingsLoaded(sample_batch(3)));
        update(&mut app, Action::NavSelected(NavTarget::WriteComplaint));
        assert_eq!(app.route, Route::Complaint);

        // After a failure
        let mut app = test_app();
        update(&mut app, Action::FetchFailed(FetchError::NoContent));
        update(&mut app, Action::NavSelected(NavTarget::WriteComplaint));
        assert_eq!(app.route, Route::Complaint);
    }

    #[test]
    fn test_nav_back_to_list_from_other_screen() {
        let mut app = test_app();
        update(&mut app, Action::NavSelected(NavTarget::WriteComplaint));
        update(&mut app, Action::NavSelected(NavTarget::ApartmentsList));
        assert_eq!(app.route, Route::Listings);
    }

    #[test]
    fn test_menu_dispatch() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::MenuSelected(MenuAction::Filter)),
            Effect::OpenFilterDialog
        );
        assert_eq!(app.route, Route::Listings);

        update(&mut app, Action::MenuSelected(MenuAction::Profile));
        assert_eq!(app.route, Route::Profile);
    }

    #[test]
    fn test_complaint_submission_notices_and_returns() {
        let mut app = test_app();
        update(&mut app, Action::NavSelected(NavTarget::WriteComplaint));
        update(
            &mut app,
            Action::ComplaintSubmitted("The heating is broken".to_string()),
        );
        assert_eq!(app.route, Route::Listings);
        assert_eq!(app.notice.as_ref().unwrap().text, "Complaint submitted");
    }

    #[test]
    fn test_filter_criteria_stored() {
        let mut app = test_app();
        let criteria = FilterCriteria {
            min_price: Some(30),
            max_price: Some(80),
            min_rooms: Some(2),
        };
        update(&mut app, Action::FilterApplied(criteria.clone()));
        assert_eq!(app.filter, criteria);
    }

    #[test]
    fn test_thumbnail_resolution_recorded() {
        let mut app = test_app();
        update(&mut app, Action::ListingsLoaded(sample_batch(1)));
        update(
            &mut app,
            Action::ThumbnailResolved {
                url: "https://img.example/0.jpg".to_string(),
                outcome: Ok(2048),
            },
        );
        assert_eq!(
            app.thumbnails.status("https://img.example/0.jpg"),
            Some(&Thumbnail::Ready { bytes: 2048 })
        );
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
