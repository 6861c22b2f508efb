pub mod back;
pub mod click;
pub mod link;
pub mod month;
pub mod remove;
pub mod show;
pub mod vacations;

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use contcal_core::{App, CalendarConfig, Effects};

use crate::store::{ViewData, ViewFile};

/// Everything a command needs: the hydrated application state, the view
/// file it came from, and the injected clock.
pub struct Ctx {
    pub app: App,
    pub view: ViewData,
    pub file: ViewFile,
    pub today: NaiveDate,
    /// Set when --state was given: the view is inspected, never saved.
    pub ephemeral: bool,
}

impl Ctx {
    pub fn load(
        state: Option<String>,
        today: Option<NaiveDate>,
        config_path: Option<&Path>,
    ) -> Result<Ctx> {
        let config = CalendarConfig::load_or_default(config_path)?;
        let file = ViewFile::new(ViewFile::default_path()?);

        let (view, ephemeral) = match state {
            Some(query) => (
                ViewData {
                    current: query,
                    history: Vec::new(),
                },
                true,
            ),
            None => (file.load()?, false),
        };

        let app = App::from_query(config, &view.current);
        let today = today.unwrap_or_else(|| Local::now().date_naive());

        Ok(Ctx {
            app,
            view,
            file,
            today,
            ephemeral,
        })
    }

    /// Apply a handler's effects to the saved view, mirroring the browser:
    /// Replace rewrites the current entry, Push stacks it for `back`.
    pub fn commit(&mut self, effects: &Effects) -> Result<()> {
        if let Some(write) = &effects.query_write {
            self.view.apply(write);
            self.save()?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if !self.ephemeral {
            self.file.save(&self.view)?;
        }
        Ok(())
    }
}
