//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (initial fetch in flight): draws every ~80ms so the
//!   spinner moves.
//! - **Idle**: sleeps up to 250ms, redraws on events or when a notice
//!   expires.
//!
//! ## Background work
//!
//! The fetch and the photo loads run as tokio tasks and report back over a
//! std `mpsc` channel as actions; the loop drains that channel every turn.
//! If the loop is gone (screen torn down mid-fetch), the task's send fails
//! and the task simply exits.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{info, warn};

use crate::api::provider::ListingsProvider;
use crate::api::thumbs;
use crate::core::action::{Action, Effect, MenuAction, NavTarget, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, LoadPhase, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ComplaintEvent, ComplaintForm, FilterDialogState, FilterEvent, ListEvent, ListingListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub listing_list: ListingListState,
    pub complaint_form: ComplaintForm,
    /// Filter overlay (None = hidden). While open, all events route to it.
    pub filter_dialog: Option<FilterDialogState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            listing_list: ListingListState::new(),
            complaint_form: ComplaintForm::new(),
            filter_dialog: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(provider: Arc<dyn ListingsProvider>, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(provider, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;

    // Activation: build the view, then trigger the one startup fetch.
    let effect = update(&mut app, Action::FetchRequested);
    run_effect(effect, &mut app, &mut tui, &tx, &mut should_quit);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.clear_expired_notice() {
            needs_redraw = true;
        }

        // Spinner runs while the fetch is out
        let animating = app.fetch_in_flight && app.phase == LoadPhase::Initializing;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, longer when idle
        // (still bounded so notice expiry gets noticed).
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                run_effect(effect, &mut app, &mut tui, &tx, &mut should_quit);
                continue;
            }

            // When the filter dialog is open, route all events to it
            if tui.filter_dialog.is_some() {
                let filter_event = tui
                    .filter_dialog
                    .as_mut()
                    .and_then(|dialog| dialog.handle_event(&event));
                match filter_event {
                    Some(FilterEvent::Apply(criteria)) => {
                        tui.filter_dialog = None;
                        let effect = update(&mut app, Action::FilterApplied(criteria));
                        run_effect(effect, &mut app, &mut tui, &tx, &mut should_quit);
                    }
                    Some(FilterEvent::Dismiss) => {
                        tui.filter_dialog = None;
                    }
                    None => {}
                }
                continue;
            }

            // Screen dispatch
            let effect = match app.route {
                Route::Listings => handle_listings_event(&mut app, &mut tui, &event),
                Route::Detail(_) | Route::Profile => handle_readonly_screen_event(&mut app, &event),
                Route::Complaint => handle_complaint_event(&mut app, &mut tui, &event),
            };
            run_effect(effect, &mut app, &mut tui, &tx, &mut should_quit);
        }

        // Handle background task actions (fetch completion, photo loads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            run_effect(effect, &mut app, &mut tui, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Keys on the listings screen: list navigation plus the menu and nav-bar
/// shortcuts.
fn handle_listings_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('f') => update(app, Action::MenuSelected(MenuAction::Filter)),
        TuiEvent::InputChar('p') => update(app, Action::MenuSelected(MenuAction::Profile)),
        TuiEvent::InputChar('1') => update(app, Action::NavSelected(NavTarget::ApartmentsList)),
        TuiEvent::InputChar('2') => update(app, Action::NavSelected(NavTarget::WriteComplaint)),
        _ => match tui.listing_list.handle_event(event) {
            Some(ListEvent::Activated(position)) => update(app, Action::RowActivated(position)),
            None => Effect::None,
        },
    }
}

/// Detail and profile screens only navigate away.
fn handle_readonly_screen_event(app: &mut App, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => update(app, Action::Back),
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('1') => update(app, Action::NavSelected(NavTarget::ApartmentsList)),
        TuiEvent::InputChar('2') => update(app, Action::NavSelected(NavTarget::WriteComplaint)),
        _ => Effect::None,
    }
}

/// The complaint screen owns the keyboard while composing.
fn handle_complaint_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => update(app, Action::Back),
        _ => match tui.complaint_form.handle_event(event) {
            Some(ComplaintEvent::Submit(text)) => update(app, Action::ComplaintSubmitted(text)),
            None => Effect::None,
        },
    }
}

fn run_effect(
    effect: Effect,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::SpawnFetch => spawn_fetch(app.provider.clone(), tx.clone()),
        Effect::SpawnThumbnails(urls) => spawn_thumbnails(urls, tx.clone()),
        Effect::OpenFilterDialog => {
            tui.filter_dialog = Some(FilterDialogState::new(&app.filter));
        }
    }
}

/// One fetch = one task. Exactly one action comes back on the channel.
fn spawn_fetch(provider: Arc<dyn ListingsProvider>, tx: mpsc::Sender<Action>) {
    info!("Spawning listings fetch via {}", provider.name());
    tokio::spawn(async move {
        let action = match provider.fetch_all().await {
            Ok(records) => Action::ListingsLoaded(records),
            Err(e) => Action::FetchFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

/// Fire-and-forget photo loads, one task per URL.
fn spawn_thumbnails(urls: Vec<String>, tx: mpsc::Sender<Action>) {
    if urls.is_empty() {
        return;
    }
    info!("Spawning {} photo loads", urls.len());
    let client = reqwest::Client::new();
    for url in urls {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome =
                match tokio::time::timeout(Duration::from_secs(15), thumbs::fetch_image(&client, &url))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(()),
                };
            // Best-effort: a dropped receiver just means the screen is gone
            let _ = tx.send(Action::ThumbnailResolved { url, outcome });
        });
    }
}
