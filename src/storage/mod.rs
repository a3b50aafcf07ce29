//! Storage boundary for roster snapshots
//!
//! The front end only ever talks to the `RosterStore` trait; the JSON file
//! implementation is one backing among possible others.

pub mod json_store;
pub mod store;

pub use json_store::JsonRosterStore;
pub use store::{RosterStore, StoreError};
