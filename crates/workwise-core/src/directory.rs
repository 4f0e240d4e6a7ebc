//! Employee directory
//!
//! The single authoritative roster of candidate assignees. It is read-only
//! and shared behind an `Arc` by the workflow controller, the suggestion
//! engine and the views.

use crate::seed;
use crate::tickets::TicketStore;
use crate::types::{Employee, EmployeeId};
use serde::Serialize;

/// Read-only roster of employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    /// Create a directory from a roster
    #[inline]
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Directory with the seeded team
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::employees())
    }

    /// Look up an employee by id
    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Look up an employee by name (case-insensitive)
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
    }

    /// All employees in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Number of employees
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Team table rows with workload derived from the ticket store
    #[must_use]
    pub fn team_view(&self, store: &TicketStore) -> Vec<TeamMember> {
        self.employees
            .iter()
            .map(|employee| TeamMember {
                initials: initials(&employee.name),
                assigned_tickets: store.assigned_codes(&employee.name),
                employee: employee.clone(),
            })
            .collect()
    }
}

/// Row of the team table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    /// Employee record
    pub employee: Employee,
    /// Avatar label
    pub initials: String,
    /// Codes of tickets currently owned by the employee
    pub assigned_tickets: Vec<String>,
}

/// First letter of every word in a name
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    #[test]
    fn lookup_by_id_and_name() {
        let directory = EmployeeDirectory::seeded();
        assert_eq!(directory.len(), 6);
        assert_eq!(directory.get(EmployeeId(3)).unwrap().name, "Anita Patel");
        assert_eq!(directory.by_name(" vikram singh").unwrap().id, EmployeeId(4));
        assert!(directory.get(EmployeeId(99)).is_none());
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Priya Sharma"), "PS");
        assert_eq!(initials("  Arjun   Nair "), "AN");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn team_view_reflects_store() {
        let directory = EmployeeDirectory::seeded();
        let mut store = TicketStore::seeded();
        store.insert(crate::types::Ticket::new(9, "TK009", "Regression suite", "Add tests", Priority::Low));

        let rows = directory.team_view(&store);
        let anita = rows.iter().find(|r| r.employee.name == "Anita Patel").unwrap();
        assert_eq!(anita.assigned_tickets, vec!["TK001".to_string()]);

        let sneha = rows.iter().find(|r| r.employee.name == "Sneha Reddy").unwrap();
        assert!(sneha.assigned_tickets.is_empty());
        assert_eq!(sneha.initials, "SR");
    }
}
