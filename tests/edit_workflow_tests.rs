#[cfg(test)]
mod tests {
    use staff_view::data::entities::{Department, DepartmentId, Employee, EmployeeId};
    use staff_view::data::roster::Roster;
    use staff_view::data::roster_view::RosterView;
    use staff_view::edit_manager::EditManager;
    use staff_view::storage::{JsonRosterStore, RosterStore};

    fn seed_roster() -> Roster {
        Roster {
            departments: vec![Department::new(DepartmentId(1), "Engineering")],
            positions: vec![],
            employees: vec![
                Employee::new(EmployeeId(1), "Ann Lee").with_department(DepartmentId(1)),
            ],
        }
    }

    #[test]
    fn test_create_edit_commit_reload_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRosterStore::new(dir.path().join("roster.json"));
        store.save_changes(&seed_roster()).unwrap();

        let mut roster = store.load().unwrap();
        let mut editor = EditManager::new();

        let id = editor.create_new(&mut roster);
        roster.employee_mut(id).unwrap().full_name = "Ivan Petrov".to_string();
        roster.employee_mut(id).unwrap().department = Some(DepartmentId(1));

        editor.commit(&roster, &store).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.employee_count(), 2);

        let saved = reloaded.employee(id).unwrap();
        assert_eq!(saved.full_name, "Ivan Petrov");
        assert_eq!(saved.department, Some(DepartmentId(1)));
    }

    #[test]
    fn test_new_employee_is_visible_in_unfiltered_view_before_commit() {
        let mut roster = seed_roster();
        let mut editor = EditManager::new();

        let id = editor.create_new(&mut roster);

        let view = RosterView::new();
        let visible = view.derive_view(&roster.employees);

        assert_eq!(visible.len(), 2);
        assert_eq!(roster.employees[*visible.last().unwrap()].id, id);
    }

    #[test]
    fn test_commit_without_required_fields_still_attempts_save() {
        // No validation lives in this layer: a fully blank record commits
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRosterStore::new(dir.path().join("roster.json"));

        let mut roster = Roster::new();
        let mut editor = EditManager::new();
        editor.create_new(&mut roster);

        editor.commit(&roster, &store).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.employee_count(), 1);
        assert!(reloaded.employees[0].full_name.is_empty());
    }

    #[test]
    fn test_failed_commit_leaves_memory_and_disk_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let good_store = JsonRosterStore::new(dir.path().join("roster.json"));
        good_store.save_changes(&seed_roster()).unwrap();

        let mut roster = good_store.load().unwrap();
        let mut editor = EditManager::new();
        let id = editor.create_new(&mut roster);

        // Point the commit at an unwritable location
        let broken_store = JsonRosterStore::new(dir.path().join("no-such-dir").join("roster.json"));
        let err = editor.commit(&roster, &broken_store).unwrap_err();
        assert!(!err.to_string().is_empty());

        // In-memory: the pending record is still there and still selected
        assert_eq!(roster.employee_count(), 2);
        assert_eq!(editor.selection(), Some(id));

        // On disk: the original snapshot is untouched
        assert_eq!(good_store.load().unwrap().employee_count(), 1);
    }
}
