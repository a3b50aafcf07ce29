use serde::{Deserialize, Serialize};

use crate::data::entities::{Department, DepartmentId, Employee, EmployeeId, Position, PositionId};

/// The in-memory roster snapshot: departments, positions and the employee
/// backing list, loaded once at startup from a store.
///
/// The employee list is the single source of truth for everything the view
/// layer shows; derived views hold indices into it rather than copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Look up an employee by id
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Mutable lookup, used by the edit workflow
    pub fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    /// Resolve a department id to its display name
    pub fn department_name(&self, id: DepartmentId) -> Option<&str> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Resolve a position id to its display name
    pub fn position_name(&self, id: PositionId) -> Option<&str> {
        self.positions
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    /// Find a department by name, ignoring ASCII case
    pub fn department_by_name(&self, name: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Find a position by name, ignoring ASCII case
    pub fn position_by_name(&self, name: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Next free employee id
    pub fn next_employee_id(&self) -> EmployeeId {
        let max = self.employees.iter().map(|e| e.id.0).max().unwrap_or(0);
        EmployeeId(max + 1)
    }

    /// Append an employee to the backing list and return its id
    pub fn add_employee(&mut self, employee: Employee) -> EmployeeId {
        let id = employee.id;
        self.employees.push(employee);
        id
    }
}
