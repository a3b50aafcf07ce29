//! A view over the employee backing list that filters and sorts without
//! modifying the underlying data.
//!
//! The view owns the current criteria (department, position, search text,
//! sort) and derives visible row indices on demand; it never materializes a
//! second copy of the employee list.

use std::cmp::Ordering;

use tracing::debug;

use crate::data::entities::{DepartmentId, Employee, PositionId};

/// Sort direction for the employee list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Which employee attribute the view sorts by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FullName,
}

/// Represents how the employee list should be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

/// A selector entry pairing a human label with an optional sort spec.
/// `spec: None` is the "no sorting" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortMode {
    pub label: &'static str,
    pub spec: Option<SortSpec>,
}

/// The selector entries in display order, "no sorting" first
pub fn sort_modes() -> [SortMode; 3] {
    [
        SortMode {
            label: "No sorting",
            spec: None,
        },
        SortMode {
            label: "Name A-Z",
            spec: Some(SortSpec {
                key: SortKey::FullName,
                order: SortOrder::Ascending,
            }),
        },
        SortMode {
            label: "Name Z-A",
            spec: Some(SortSpec {
                key: SortKey::FullName,
                order: SortOrder::Descending,
            }),
        },
    ]
}

/// Active filter criteria for the employee list
///
/// An unset criterion means no constraint; there is no sentinel entity
/// standing in for "all departments" anywhere in the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub department: Option<DepartmentId>,
    pub position: Option<PositionId>,
    /// Stored pre-trimmed; empty means no text criterion
    pub search: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.position.is_none() && self.search.is_empty()
    }
}

/// Holds the current filter/sort criteria and derives the visible, ordered
/// subset of the employee backing list.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    filter: FilterState,
    sort: Option<SortSpec>,
}

impl RosterView {
    /// A view with no filter and no sorting
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the department criterion; `None` clears it
    pub fn set_department_filter(&mut self, selection: Option<DepartmentId>) {
        debug!(target: "view", "department filter -> {:?}", selection);
        self.filter.department = selection;
    }

    /// Replace the position criterion; `None` clears it
    pub fn set_position_filter(&mut self, selection: Option<PositionId>) {
        debug!(target: "view", "position filter -> {:?}", selection);
        self.filter.position = selection;
    }

    /// Replace the search criterion. Leading/trailing whitespace is trimmed;
    /// empty after trim means no text criterion.
    pub fn set_search_text(&mut self, text: &str) {
        let trimmed = text.trim();
        debug!(target: "view", "search text -> {:?}", trimmed);
        self.filter.search = trimmed.to_string();
    }

    /// Replace the sort criterion only; filter criteria are untouched
    pub fn set_sort_mode(&mut self, spec: Option<SortSpec>) {
        debug!(target: "view", "sort -> {:?}", spec);
        self.sort = spec;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// The filter predicate: true iff the employee satisfies every set
    /// criterion. Criteria are checked department, position, then search.
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(department) = self.filter.department {
            if employee.department != Some(department) {
                return false;
            }
        }

        if let Some(position) = self.filter.position {
            if employee.position != Some(position) {
                return false;
            }
        }

        if !self.filter.search.is_empty() {
            let needle = self.filter.search.to_lowercase();
            return employee.full_name.to_lowercase().contains(&needle);
        }

        true
    }

    /// Derive the visible row indices: filter preserving backing-list order,
    /// then stable-sort by the current sort spec if one is set.
    ///
    /// The backing slice is never mutated, and repeated calls with unchanged
    /// inputs return the same indices.
    pub fn derive_view(&self, employees: &[Employee]) -> Vec<usize> {
        let mut visible: Vec<usize> = (0..employees.len())
            .filter(|&idx| self.matches(&employees[idx]))
            .collect();

        if let Some(spec) = self.sort {
            visible.sort_by(|&a, &b| Self::compare(&employees[a], &employees[b], spec));
        }

        debug!(
            target: "view",
            "derived view: {} of {} rows visible",
            visible.len(),
            employees.len()
        );

        visible
    }

    fn compare(a: &Employee, b: &Employee, spec: SortSpec) -> Ordering {
        let result = match spec.key {
            SortKey::FullName => a.full_name.cmp(&b.full_name),
        };

        match spec.order {
            SortOrder::Ascending => result,
            SortOrder::Descending => result.reverse(),
        }
    }
}
