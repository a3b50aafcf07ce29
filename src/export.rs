//! Exports the currently derived view to CSV or JSON files
//!
//! Rows are written in view order with department/position ids resolved to
//! their display names.

use std::fs::File;

use anyhow::{anyhow, Result};
use chrono::Local;
use serde_json::Value;

use crate::data::entities::Employee;
use crate::data::roster::Roster;

const EXPORT_HEADERS: [&str; 5] = ["id", "full_name", "department", "position", "hired_on"];

/// Handles exporting visible roster rows to various formats
pub struct ViewExporter;

impl ViewExporter {
    /// Export the visible rows to a CSV file; returns the written filename.
    /// With no filename given, a timestamped one is generated.
    pub fn export_to_csv(
        roster: &Roster,
        visible: &[usize],
        filename: Option<&str>,
    ) -> Result<String> {
        if visible.is_empty() {
            return Err(anyhow!("No rows to export"));
        }

        let filename = filename.map(str::to_string).unwrap_or_else(|| {
            format!("roster_view_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))
        });

        let mut writer = csv::Writer::from_path(&filename)?;
        writer.write_record(EXPORT_HEADERS)?;

        for &idx in visible {
            if let Some(employee) = roster.employees.get(idx) {
                writer.write_record(&[
                    employee.id.to_string(),
                    employee.full_name.clone(),
                    Self::resolved_department(roster, employee),
                    Self::resolved_position(roster, employee),
                    employee
                        .hired_on
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(filename)
    }

    /// Export the visible rows to a pretty-printed JSON file
    pub fn export_to_json(
        roster: &Roster,
        visible: &[usize],
        filename: Option<&str>,
    ) -> Result<String> {
        if visible.is_empty() {
            return Err(anyhow!("No rows to export"));
        }

        let filename = filename.map(str::to_string).unwrap_or_else(|| {
            format!("roster_view_{}.json", Local::now().format("%Y%m%d_%H%M%S"))
        });

        let mut json_array = Vec::new();
        for &idx in visible {
            if let Some(employee) = roster.employees.get(idx) {
                let mut json_obj = serde_json::Map::new();
                json_obj.insert("id".to_string(), Value::from(employee.id.0));
                json_obj.insert(
                    "full_name".to_string(),
                    Value::String(employee.full_name.clone()),
                );
                json_obj.insert(
                    "department".to_string(),
                    Value::String(Self::resolved_department(roster, employee)),
                );
                json_obj.insert(
                    "position".to_string(),
                    Value::String(Self::resolved_position(roster, employee)),
                );
                json_obj.insert(
                    "hired_on".to_string(),
                    employee
                        .hired_on
                        .map(|d| Value::String(d.to_string()))
                        .unwrap_or(Value::Null),
                );
                json_array.push(Value::Object(json_obj));
            }
        }

        let file = File::create(&filename)?;
        serde_json::to_writer_pretty(file, &json_array)?;

        Ok(filename)
    }

    fn resolved_department(roster: &Roster, employee: &Employee) -> String {
        employee
            .department
            .and_then(|id| roster.department_name(id))
            .unwrap_or("")
            .to_string()
    }

    fn resolved_position(roster: &Roster, employee: &Employee) -> String {
        employee
            .position
            .and_then(|id| roster.position_name(id))
            .unwrap_or("")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::entities::{Department, DepartmentId, Employee, EmployeeId};
    use std::fs;

    fn sample_roster() -> Roster {
        Roster {
            departments: vec![Department::new(DepartmentId(1), "Engineering")],
            positions: vec![],
            employees: vec![
                Employee::new(EmployeeId(1), "Ann Lee").with_department(DepartmentId(1)),
                Employee::new(EmployeeId(2), "Bob Lee"),
            ],
        }
    }

    #[test]
    fn test_csv_export_resolves_names_in_view_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let roster = sample_roster();

        let written =
            ViewExporter::export_to_csv(&roster, &[1, 0], Some(path.to_str().unwrap())).unwrap();

        let contents = fs::read_to_string(written).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "id,full_name,department,position,hired_on");
        assert!(lines[1].starts_with("2,Bob Lee,"));
        assert!(lines[2].starts_with("1,Ann Lee,Engineering"));
    }

    #[test]
    fn test_empty_view_refuses_export() {
        let roster = sample_roster();
        assert!(ViewExporter::export_to_csv(&roster, &[], None).is_err());
        assert!(ViewExporter::export_to_json(&roster, &[], None).is_err());
    }

    #[test]
    fn test_json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let roster = sample_roster();

        let written =
            ViewExporter::export_to_json(&roster, &[0], Some(path.to_str().unwrap())).unwrap();

        let contents = fs::read_to_string(written).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["full_name"], "Ann Lee");
        assert_eq!(parsed[0]["department"], "Engineering");
        assert_eq!(parsed[0]["hired_on"], Value::Null);
    }
}
