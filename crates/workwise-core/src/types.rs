//! Core types for WorkWise
//!
//! Defines the fundamental data model:
//! - Ticket and employee identifiers
//! - Tickets with priority, status and optional assignee
//! - Employees with role and availability
//! - Ranked suggestions produced by a suggestion engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u32);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a label does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Work priority
///
/// Tickets only use `Low`, `Medium` and `High`; AI reports may also be
/// `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
    /// Critical (reports only)
    Critical,
}

impl Priority {
    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(ParseLabelError::new("priority", s)),
        }
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Not started and open for assignment
    #[serde(rename = "To Do")]
    ToDo,
    /// Being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Awaiting review
    Review,
    /// Blocked or waiting
    Pending,
    /// Done
    Completed,
    /// Assigned through the assignment workflow
    Assigned,
}

impl TicketStatus {
    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::ToDo => "To Do",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Review => "Review",
            TicketStatus::Pending => "Pending",
            TicketStatus::Completed => "Completed",
            TicketStatus::Assigned => "Assigned",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Employee availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Free to pick up work
    Available,
    /// Occupied
    Busy,
    /// Out of office
    Away,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmployeeStatus::Available => "Available",
            EmployeeStatus::Busy => "Busy",
            EmployeeStatus::Away => "Away",
        };
        f.pad(label)
    }
}

/// Unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Immutable identifier
    pub id: TicketId,
    /// Human-readable code, e.g. `TK005`
    pub code: String,
    /// Short title
    pub title: String,
    /// Longer description shown in the AI panel
    pub description: String,
    /// Priority
    pub priority: Priority,
    /// Lifecycle status
    pub status: TicketStatus,
    /// Name of the employee that owns the ticket
    pub assignee: Option<String>,
}

impl Ticket {
    /// Create a new unassigned "To Do" ticket
    #[must_use]
    pub fn new(
        id: u32,
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: TicketId(id),
            code: code.into(),
            title: title.into(),
            description: description.into(),
            priority,
            status: TicketStatus::ToDo,
            assignee: None,
        }
    }

    /// With an existing owner and status
    #[inline]
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>, status: TicketStatus) -> Self {
        self.assignee = Some(assignee.into());
        self.status = status;
        self
    }

    /// Whether the ticket can be picked for a new assignment
    #[inline]
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assignee.is_none() && self.status == TicketStatus::ToDo
    }
}

/// Candidate assignee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,
    /// Full name, used as the ticket assignee reference
    pub name: String,
    /// Job role
    pub role: String,
    /// Work e-mail
    pub email: String,
    /// Current availability
    pub status: EmployeeStatus,
}

impl Employee {
    /// Create a new employee
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        status: EmployeeStatus,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            role: role.into(),
            email: email.into(),
            status,
        }
    }
}

/// Ranked recommendation of an employee for a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Recommended employee
    pub employee: Employee,
    /// Why the employee was picked, most important first
    pub reasons: Vec<String>,
    /// Match score in `0..=100`
    pub match_score: u8,
}

impl Suggestion {
    /// Create a suggestion; the score is clamped to 100
    #[must_use]
    pub fn new(employee: Employee, reasons: Vec<String>, match_score: u8) -> Self {
        Self {
            employee,
            reasons,
            match_score: match_score.min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_requires_todo_and_no_owner() {
        let ticket = Ticket::new(1, "TK100", "t", "d", Priority::Low);
        assert!(ticket.is_unassigned());

        let owned = ticket.clone().with_assignee("Raj", TicketStatus::ToDo);
        assert!(!owned.is_unassigned());

        let mut reviewing = ticket;
        reviewing.status = TicketStatus::Review;
        assert!(!reviewing.is_unassigned());
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Critical ".parse::<Priority>().unwrap(), Priority::Critical);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn status_serializes_with_labels() {
        let json = serde_json::to_string(&TicketStatus::ToDo).unwrap();
        assert_eq!(json, "\"To Do\"");
        assert_eq!(TicketStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn suggestion_score_is_clamped() {
        let employee = Employee::new(1, "A", "Dev", "a@x.io", EmployeeStatus::Away);
        let suggestion = Suggestion::new(employee, vec![], 140);
        assert_eq!(suggestion.match_score, 100);
    }
}
