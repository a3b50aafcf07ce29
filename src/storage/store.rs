use thiserror::Error;

use crate::data::roster::Roster;

/// Errors surfaced by roster stores
///
/// Only store operations can fail in this crate; the message is shown to the
/// user verbatim as a single notice and the operation is not retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster data is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("{0}")]
    Save(String),
}

/// Core trait for loading and committing roster snapshots
///
/// A store hands out one snapshot at startup and commits all accumulated
/// in-memory mutations as one atomic batch. There is no partial-commit or
/// conflict-resolution contract beyond "succeeds or raises one error".
pub trait RosterStore {
    /// Load the startup snapshot
    fn load(&self) -> Result<Roster, StoreError>;

    /// Persist the current in-memory state as one atomic batch
    fn save_changes(&self, roster: &Roster) -> Result<(), StoreError>;
}
