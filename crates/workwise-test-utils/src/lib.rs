//! Testing utilities for WorkWise workspace
//!
//! Shared fixtures: configs without latency, seeded workflows and ticket
//! stores in specific shapes.

#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;
use workwise_core::{
    AssignmentWorkflow, Employee, EmployeeDirectory, EmployeeStatus, MockSuggestionEngine,
    Priority, Ticket, TicketStatus, TicketStore, WorkwiseConfig,
};

/// Config with no suggestion latency
pub fn fast_config() -> WorkwiseConfig {
    WorkwiseConfig::new().with_suggestion_delay(Duration::ZERO)
}

/// Config with the default two-second latency, for paused-clock tests
pub fn slow_config() -> WorkwiseConfig {
    WorkwiseConfig::new()
}

pub fn open_ticket(id: u32, code: &str) -> Ticket {
    Ticket::new(id, code, format!("Ticket {code}"), "Test ticket", Priority::Medium)
}

pub fn assigned_ticket(id: u32, code: &str, assignee: &str) -> Ticket {
    open_ticket(id, code).with_assignee(assignee, TicketStatus::InProgress)
}

pub fn employee(id: u32, name: &str) -> Employee {
    let email = format!("{}@test.io", name.to_lowercase().replace(' ', "."));
    Employee::new(id, name, "Engineer", email, EmployeeStatus::Available)
}

pub fn setup_test_workflow() -> AssignmentWorkflow {
    AssignmentWorkflow::seeded(fast_config())
}

/// Workflow over `tickets` with the seeded roster and ranking
pub fn workflow_with_tickets(config: WorkwiseConfig, tickets: Vec<Ticket>) -> AssignmentWorkflow {
    let directory = Arc::new(EmployeeDirectory::seeded());
    let engine = Arc::new(MockSuggestionEngine::seeded(
        &directory,
        config.suggestion_delay(),
    ));
    AssignmentWorkflow::new(config, TicketStore::new(tickets), directory, engine)
}

/// Workflow where every ticket already has an owner
pub fn exhausted_workflow() -> AssignmentWorkflow {
    let tickets = workwise_core::seed::tickets()
        .into_iter()
        .map(|t| {
            if t.is_unassigned() {
                t.with_assignee("Sneha Reddy", TicketStatus::InProgress)
            } else {
                t
            }
        })
        .collect();
    workflow_with_tickets(fast_config(), tickets)
}
