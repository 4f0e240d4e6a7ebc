//! Ticket store
//!
//! Holds the dashboard tickets and their assignment state. Status and
//! assignee only change through [`TicketStore::commit_assignment`], which is
//! reachable from the assignment workflow alone.

use crate::error::WorkflowError;
use crate::seed;
use crate::types::{Employee, Ticket, TicketId, TicketStatus};

/// In-memory ticket collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create a store from a ticket list
    #[inline]
    #[must_use]
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Store with the seeded dashboard tickets
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::tickets())
    }

    /// Add a ticket at load time
    ///
    /// Returns `false` (and leaves the store unchanged) if the id or code is
    /// already taken.
    pub fn insert(&mut self, ticket: Ticket) -> bool {
        let taken = self
            .tickets
            .iter()
            .any(|t| t.id == ticket.id || t.code.eq_ignore_ascii_case(&ticket.code));
        if taken {
            return false;
        }
        self.tickets.push(ticket);
        true
    }

    /// Look up a ticket by id
    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Look up a ticket by its human-readable code (case-insensitive)
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&Ticket> {
        self.tickets
            .iter()
            .find(|t| t.code.eq_ignore_ascii_case(code.trim()))
    }

    /// All tickets in load order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Tickets with no assignee that are still "To Do"
    #[must_use]
    pub fn unassigned(&self) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.is_unassigned()).collect()
    }

    /// Whether at least one ticket is open for assignment
    #[inline]
    #[must_use]
    pub fn has_unassigned(&self) -> bool {
        self.tickets.iter().any(Ticket::is_unassigned)
    }

    /// Codes of tickets owned by the named employee
    #[must_use]
    pub fn assigned_codes(&self, employee_name: &str) -> Vec<String> {
        self.tickets
            .iter()
            .filter(|t| t.assignee.as_deref() == Some(employee_name))
            .map(|t| t.code.clone())
            .collect()
    }

    /// Assign an open ticket to an employee
    ///
    /// # Errors
    /// - `WorkflowError::TicketNotFound` if the id is unknown
    /// - `WorkflowError::TicketNotAssignable` if the ticket already has an
    ///   owner or is past "To Do"
    pub(crate) fn commit_assignment(
        &mut self,
        id: TicketId,
        employee: &Employee,
    ) -> Result<Ticket, WorkflowError> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| WorkflowError::ticket_not_found(id))?;

        if !ticket.is_unassigned() {
            return Err(WorkflowError::TicketNotAssignable(ticket.code.clone()));
        }

        ticket.assignee = Some(employee.name.clone());
        ticket.status = TicketStatus::Assigned;
        Ok(ticket.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmployeeStatus, Priority};

    fn employee() -> Employee {
        Employee::new(4, "Vikram Singh", "DevOps Engineer", "v@x.io", EmployeeStatus::Available)
    }

    #[test]
    fn seeded_unassigned_are_last_four() {
        let store = TicketStore::seeded();
        let codes: Vec<_> = store.unassigned().iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["TK005", "TK006", "TK007", "TK008"]);
        assert!(store.has_unassigned());
    }

    #[test]
    fn commit_moves_ticket_out_of_unassigned() {
        let mut store = TicketStore::seeded();
        let updated = store.commit_assignment(TicketId(6), &employee()).unwrap();

        assert_eq!(updated.status, TicketStatus::Assigned);
        assert_eq!(updated.assignee.as_deref(), Some("Vikram Singh"));
        assert!(store.unassigned().iter().all(|t| t.id != TicketId(6)));
        assert_eq!(store.assigned_codes("Vikram Singh"), vec!["TK004", "TK006"]);
    }

    #[test]
    fn commit_rejects_owned_and_unknown_tickets() {
        let mut store = TicketStore::seeded();
        assert_eq!(
            store.commit_assignment(TicketId(1), &employee()),
            Err(WorkflowError::TicketNotAssignable("TK001".to_string()))
        );
        assert_eq!(
            store.commit_assignment(TicketId(77), &employee()),
            Err(WorkflowError::TicketNotFound("77".to_string()))
        );
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut store = TicketStore::seeded();
        assert!(!store.insert(Ticket::new(99, "tk005", "dup", "dup", Priority::Low)));
        assert!(!store.insert(Ticket::new(5, "TK099", "dup", "dup", Priority::Low)));
        assert!(store.insert(Ticket::new(9, "TK009", "new", "new", Priority::Low)));
        assert_eq!(store.by_code("tk009").unwrap().id, TicketId(9));
    }
}
