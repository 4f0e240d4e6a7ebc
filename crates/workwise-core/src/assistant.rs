//! Dashboard chat assistant
//!
//! A floating prompt box. Sending a non-blank prompt closes the box and
//! opens the employee details page, which shows the best-ranked
//! candidates with their current workload.

use crate::directory::{initials, TeamMember};
use crate::tickets::TicketStore;
use crate::types::Suggestion;

/// Number of employees on the details page
pub const DETAILS_PAGE_SIZE: usize = 3;

/// Chat box and details page visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatAssistant {
    open: bool,
    prompt: String,
    details_open: bool,
}

impl ChatAssistant {
    /// Closed chat box, details page hidden
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[inline]
    #[must_use]
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the box; a typed prompt survives until it is sent
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Send the prompt
    ///
    /// Returns `false` and changes nothing when the prompt is blank.
    /// Otherwise the box closes, the prompt clears and the details page
    /// opens.
    pub fn submit(&mut self) -> bool {
        if self.prompt.trim().is_empty() {
            return false;
        }
        tracing::debug!(prompt_len = self.prompt.len(), "chat prompt sent");
        self.open = false;
        self.prompt.clear();
        self.details_open = true;
        true
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }
}

/// Rows of the employee details page
///
/// The first [`DETAILS_PAGE_SIZE`] entries of the ranked pool, with their
/// tickets taken from `store`.
#[must_use]
pub fn details_page(ranked: &[Suggestion], store: &TicketStore) -> Vec<TeamMember> {
    ranked
        .iter()
        .take(DETAILS_PAGE_SIZE)
        .map(|s| TeamMember {
            initials: initials(&s.employee.name),
            assigned_tickets: store.assigned_codes(&s.employee.name),
            employee: s.employee.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::EmployeeDirectory;
    use crate::suggestion::{MockSuggestionEngine, SuggestionCount};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn blank_prompt_changes_nothing() {
        let mut chat = ChatAssistant::new();
        chat.open();
        chat.set_prompt("   ");
        assert!(!chat.submit());
        assert!(chat.is_open());
        assert!(!chat.details_open());
        assert_eq!(chat.prompt(), "   ");
    }

    #[test]
    fn submit_opens_details() {
        let mut chat = ChatAssistant::new();
        chat.open();
        chat.set_prompt("who is free this week?");
        assert!(chat.submit());
        assert!(!chat.is_open());
        assert!(chat.details_open());
        assert_eq!(chat.prompt(), "");

        chat.close_details();
        assert_eq!(chat, ChatAssistant::new());
    }

    #[test]
    fn details_page_lists_top_candidates() {
        let directory = EmployeeDirectory::seeded();
        let engine = MockSuggestionEngine::seeded(&directory, Duration::ZERO);
        let rows = details_page(&engine.ranked(SuggestionCount::All), &TicketStore::seeded());

        let names: Vec<_> = rows.iter().map(|r| r.employee.name.as_str()).collect();
        assert_eq!(names, vec!["Anita Patel", "Priya Sharma", "Rajesh Kumar"]);
        assert_eq!(rows[0].initials, "AP");
        assert_eq!(rows[0].assigned_tickets, vec!["TK001".to_string()]);
    }
}
