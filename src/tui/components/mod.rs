//! # TUI Components
//!
//! Two patterns, as elsewhere in the pack:
//!
//! - **Stateless (props-based)**: `TitleBar`, `NavBar`, `DetailView`,
//!   `ProfileView` — receive all data as fields, render, done.
//! - **Stateful (event-driven)**: `ListingListState`, `ComplaintForm`,
//!   `FilterDialogState` — persist across frames in `TuiState`, handle
//!   events, and emit high-level events the loop turns into actions.
//!
//! Each component file contains its state, events, rendering, and tests.

pub mod complaint_form;
pub mod detail;
pub mod filter_dialog;
pub mod listing_list;
pub mod nav_bar;
pub mod profile;
pub mod title_bar;

pub use complaint_form::{ComplaintEvent, ComplaintForm};
pub use detail::DetailView;
pub use filter_dialog::{FilterDialogState, FilterEvent};
pub use listing_list::{ListEvent, ListingList, ListingListState};
pub use nav_bar::NavBar;
pub use profile::ProfileView;
pub use title_bar::TitleBar;
