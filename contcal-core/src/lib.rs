//! Core logic for contcal, a continuous two-year calendar with shareable
//! interval state.
//!
//! This crate provides the full calendar core, kept free of any rendering
//! concern:
//! - `config`: the date range plus holiday and vacation tables
//! - `day`: per-day classification (holiday, vacation, working day, today)
//! - `grid`: the Monday-aligned week grid and month-label anchors
//! - `interval`: the two-click date-interval state machine
//! - `url_state`: query-string encoding of the persisted view state
//! - `app`: the application state object wiring the pieces together

pub mod app;
pub mod config;
pub mod day;
pub mod error;
pub mod grid;
pub mod interval;
pub mod url_state;

pub use app::{App, Effects, ScrollTarget};
pub use config::CalendarConfig;
pub use day::{CalendarDay, ClassifyOptions, classify};
pub use error::{ContCalError, ContCalResult};
pub use grid::{CalendarGrid, MonthAnchor, Week};
pub use interval::{ClickOutcome, DateInterval, DateStatus, IntervalStore};
pub use url_state::{HistoryMode, PersistedViewState, QueryWrite, YearMonth};
