//! Data layer: the roster model and the derived employee view
//!
//! This module separates the in-memory snapshot (entities, roster) from the
//! presentation-facing view state (filter/sort criteria and derived rows).

pub mod entities;
pub mod roster;
pub mod roster_view;
