//! Application state: one explicit object owning the interval store, the
//! month selection and the vacation toggle, with handlers that return their
//! effects (query writes, scroll intents) as plain values.
//!
//! The core never touches presentation: a `ScrollTarget` is an intent for
//! the rendering adapter to resolve, and a `QueryWrite` is a string for the
//! address-bar collaborator to apply.

use chrono::NaiveDate;

use crate::config::CalendarConfig;
use crate::day::ClassifyOptions;
use crate::grid::{self, CalendarGrid};
use crate::interval::{ClickOutcome, DateInterval, DateStatus, IntervalStore};
use crate::url_state::{self, HistoryMode, PersistedViewState, QueryWrite, YearMonth};

/// Where the view should scroll after state settles. Fire-and-forget: if
/// the adapter cannot locate a matching element it logs and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Date(NaiveDate),
    Today,
}

/// Side effects of one handler invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    pub query_write: Option<QueryWrite>,
    pub scroll: Option<ScrollTarget>,
}

/// The whole mutable application state. No module-level globals: callers
/// construct one `App` and route every event through it.
#[derive(Debug, Clone)]
pub struct App {
    config: CalendarConfig,
    store: IntervalStore,
    selected_month: Option<YearMonth>,
    show_vacations: bool,
    /// Latest full query string, kept so rewrites preserve parameters the
    /// codec does not own.
    query: String,
}

impl App {
    pub fn new(config: CalendarConfig) -> Self {
        App {
            config,
            store: IntervalStore::new(),
            selected_month: None,
            show_vacations: false,
            query: String::new(),
        }
    }

    /// Parse-on-load hydration from the page's query string.
    pub fn from_query(config: CalendarConfig, query: &str) -> Self {
        let state = url_state::decode(query);
        App {
            config,
            store: IntervalStore::hydrate(state.intervals),
            selected_month: state.selected_month,
            show_vacations: state.show_vacations,
            query: query.to_string(),
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn intervals(&self) -> &[DateInterval] {
        self.store.intervals()
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        self.store.cursor()
    }

    pub fn selected_month(&self) -> Option<YearMonth> {
        self.selected_month
    }

    pub fn show_vacations(&self) -> bool {
        self.show_vacations
    }

    /// The current shareable query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_of(&self, date: NaiveDate) -> DateStatus<'_> {
        self.store.status_of(date)
    }

    /// Build the week grid for the configured range under the current
    /// vacation toggle. `today` is the injected clock.
    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        grid::build(
            &self.config,
            ClassifyOptions {
                show_vacations: self.show_vacations,
                today,
            },
        )
    }

    fn persisted_state(&self) -> PersistedViewState {
        PersistedViewState {
            intervals: self.store.intervals().to_vec(),
            selected_month: self.selected_month,
            show_vacations: self.show_vacations,
        }
    }

    fn persist(&mut self, history: HistoryMode) -> QueryWrite {
        self.query = url_state::apply(&self.query, &self.persisted_state());
        QueryWrite {
            query: self.query.clone(),
            history,
        }
    }

    /// A click on a day cell. The first click only moves the cursor and
    /// writes nothing; the completing click persists the new interval.
    pub fn on_date_click(&mut self, date: NaiveDate) -> Effects {
        match self.store.click(date) {
            ClickOutcome::StartSelected => Effects::default(),
            ClickOutcome::IntervalCreated { id } => {
                tracing::debug!(%id, "interval created");
                Effects {
                    query_write: Some(self.persist(HistoryMode::Replace)),
                    scroll: None,
                }
            }
        }
    }

    /// A click on an interval-end delete marker. Unknown ids are a silent
    /// no-op; the rewrite is idempotent so it happens either way.
    pub fn on_remove_interval(&mut self, id: &str) -> Effects {
        if !self.store.remove(id) {
            tracing::debug!(%id, "remove for unknown interval id");
        }
        Effects {
            query_write: Some(self.persist(HistoryMode::Replace)),
            scroll: None,
        }
    }

    /// A click on a month label. Selecting pushes a history entry and asks
    /// to scroll to the month's first day; clicking the already-selected
    /// month toggles the selection off instead.
    pub fn on_month_click(&mut self, year: i32, month_index: u32) -> Effects {
        let clicked = YearMonth { year, month_index };
        let scroll = if self.selected_month == Some(clicked) {
            self.selected_month = None;
            None
        } else {
            self.selected_month = Some(clicked);
            clicked.first_day().map(ScrollTarget::Date)
        };

        Effects {
            query_write: Some(self.persist(HistoryMode::Push)),
            scroll,
        }
    }

    pub fn on_toggle_vacations(&mut self) -> Effects {
        self.show_vacations = !self.show_vacations;
        Effects {
            query_write: Some(self.persist(HistoryMode::Replace)),
            scroll: None,
        }
    }

    /// Scroll target for the initial render: an explicit month parameter
    /// wins, then the first stored interval, then today.
    pub fn initial_scroll(&self) -> ScrollTarget {
        if let Some(first) = self.selected_month.and_then(|ym| ym.first_day()) {
            return ScrollTarget::Date(first);
        }
        if let Some(start) = self.store.first_interval_start() {
            return ScrollTarget::Date(start);
        }
        ScrollTarget::Today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        App::new(CalendarConfig::default())
    }

    #[test]
    fn test_first_click_writes_nothing() {
        let mut app = app();
        let effects = app.on_date_click(date(2025, 3, 10));
        assert_eq!(effects, Effects::default());
        assert_eq!(app.query(), "");
    }

    #[test]
    fn test_completing_click_replaces_history() {
        let mut app = app();
        app.on_date_click(date(2025, 3, 10));
        let effects = app.on_date_click(date(2025, 3, 14));

        let write = effects.query_write.unwrap();
        assert_eq!(write.history, HistoryMode::Replace);
        assert_eq!(write.query, "dates=250310-250314");
        assert_eq!(app.query(), "dates=250310-250314");
    }

    #[test]
    fn test_cursor_is_never_persisted() {
        let mut app = app();
        app.on_date_click(date(2025, 3, 10));
        app.on_date_click(date(2025, 3, 14));
        app.on_date_click(date(2025, 6, 1)); // pending cursor

        assert!(app.cursor().is_some());
        assert!(!app.query().contains("250601"));

        // Hydrating from the written query starts Idle again.
        let reloaded = App::from_query(CalendarConfig::default(), app.query());
        assert_eq!(reloaded.cursor(), None);
        assert_eq!(reloaded.intervals().len(), 1);
    }

    #[test]
    fn test_month_click_pushes_history_and_scrolls() {
        let mut app = app();
        let effects = app.on_month_click(2026, 2);

        assert_eq!(effects.scroll, Some(ScrollTarget::Date(date(2026, 3, 1))));
        let write = effects.query_write.unwrap();
        assert_eq!(write.history, HistoryMode::Push);
        assert_eq!(write.query, "month=2603");
    }

    #[test]
    fn test_month_click_again_toggles_off() {
        let mut app = app();
        app.on_month_click(2026, 2);
        let effects = app.on_month_click(2026, 2);

        assert_eq!(effects.scroll, None);
        assert_eq!(app.selected_month(), None);
        assert_eq!(effects.query_write.unwrap().query, "");
    }

    #[test]
    fn test_vacation_toggle_roundtrip() {
        let mut app = app();
        let effects = app.on_toggle_vacations();
        let write = effects.query_write.unwrap();
        assert_eq!(write.history, HistoryMode::Replace);
        assert_eq!(write.query, "vc");

        let effects = app.on_toggle_vacations();
        assert_eq!(effects.query_write.unwrap().query, "");
    }

    #[test]
    fn test_unknown_parameters_survive_every_write() {
        let mut app = App::from_query(CalendarConfig::default(), "ref=homepage");
        app.on_date_click(date(2025, 3, 10));
        app.on_date_click(date(2025, 3, 14));
        app.on_month_click(2025, 0);
        app.on_toggle_vacations();

        let query = app.query();
        assert!(query.contains("ref=homepage"));
        assert!(query.contains("dates=250310-250314"));
        assert!(query.contains("month=2501"));
        assert!(query.contains("vc"));
    }

    #[test]
    fn test_initial_scroll_priority_order() {
        // Explicit month beats the first interval.
        let app = App::from_query(
            CalendarConfig::default(),
            "dates=250310-250314&month=2606",
        );
        assert_eq!(app.initial_scroll(), ScrollTarget::Date(date(2026, 6, 1)));

        // No month: first stored interval's start.
        let app = App::from_query(CalendarConfig::default(), "dates=250310-250314");
        assert_eq!(app.initial_scroll(), ScrollTarget::Date(date(2025, 3, 10)));

        // Neither: today.
        let app = App::from_query(CalendarConfig::default(), "");
        assert_eq!(app.initial_scroll(), ScrollTarget::Today);
    }

    #[test]
    fn test_remove_unknown_id_still_rewrites() {
        let mut app = App::from_query(CalendarConfig::default(), "dates=250310-250314");
        let effects = app.on_remove_interval("no-such-id");
        let write = effects.query_write.unwrap();
        assert_eq!(write.query, "dates=250310-250314");
        assert_eq!(app.intervals().len(), 1);
    }

    #[test]
    fn test_remove_existing_interval_clears_it_from_query() {
        let mut app = App::from_query(CalendarConfig::default(), "dates=250310-250314&vc");
        let id = app.intervals()[0].id.clone();
        let effects = app.on_remove_interval(&id);
        assert_eq!(effects.query_write.unwrap().query, "vc");
        assert!(app.intervals().is_empty());
    }
}
