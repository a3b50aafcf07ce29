use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::data::roster::Roster;
use crate::storage::store::{RosterStore, StoreError};

/// File-backed roster store using pretty-printed JSON
///
/// Saves write to a temp file in the same directory and rename over the
/// target, so a failed write never truncates the stored snapshot.
#[derive(Debug, Clone)]
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonRosterStore {
    fn load(&self) -> Result<Roster, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        let roster: Roster = serde_json::from_str(&contents)?;

        debug!(
            target: "storage",
            "loaded {} employees, {} departments, {} positions from {}",
            roster.employees.len(),
            roster.departments.len(),
            roster.positions.len(),
            self.path.display()
        );

        Ok(roster)
    }

    fn save_changes(&self, roster: &Roster) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(roster)?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;

        info!(
            target: "storage",
            "saved {} employees to {}",
            roster.employees.len(),
            self.path.display()
        );

        Ok(())
    }
}
