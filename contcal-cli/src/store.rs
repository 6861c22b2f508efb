//! On-disk view state: the saved query string plus the pushed-history
//! stack. This file is the CLI's stand-in for the browser address bar, so
//! successive invocations behave like successive events on one page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use contcal_core::{HistoryMode, QueryWrite};

const VIEW_FILE: &str = "view";

/// First line: current query string. Remaining lines: pushed history
/// entries, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ViewData {
    pub current: String,
    pub history: Vec<String>,
}

impl ViewData {
    /// Apply a query write the way a browser would: Replace swaps the
    /// current entry, Push stacks the old one for `back`.
    pub fn apply(&mut self, write: &QueryWrite) {
        match write.history {
            HistoryMode::Replace => self.current = write.query.clone(),
            HistoryMode::Push => {
                let previous = std::mem::replace(&mut self.current, write.query.clone());
                self.history.push(previous);
            }
        }
    }

    /// Pop the most recent pushed entry back into place.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

pub struct ViewFile {
    path: PathBuf,
}

impl ViewFile {
    /// Default location: ~/.local/share/contcal/view
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("contcal");
        Ok(data_dir.join(VIEW_FILE))
    }

    pub fn new(path: PathBuf) -> Self {
        ViewFile { path }
    }

    /// Missing file means a fresh view, not an error.
    pub fn load(&self) -> Result<ViewData> {
        if !self.path.exists() {
            return Ok(ViewData::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut lines = content.lines();
        let current = lines.next().unwrap_or("").to_string();
        let history = lines.map(String::from).collect();

        Ok(ViewData { current, history })
    }

    pub fn save(&self, data: &ViewData) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("View state path has no parent directory")?;
        std::fs::create_dir_all(dir)?;

        let mut content = data.current.clone();
        for entry in &data.history {
            content.push('\n');
            content.push_str(entry);
        }

        // Atomic write: tmp then rename.
        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
