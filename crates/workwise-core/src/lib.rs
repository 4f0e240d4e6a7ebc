//! WorkWise Core - ticket assignment dashboard
//!
//! In-memory model behind the WorkWise dashboard:
//! - Ticket store and employee directory with live workload
//! - Assignment workflow (AI suggestions, assign panel, success notice)
//! - Hash-chained assignment history
//! - AI report table with filters and developer drill-down
//! - Project board and workspace setup wizard
//! - Chat assistant opening the employee details page
//!
//! # Example
//!
//! ```rust,ignore
//! use workwise_core::prelude::*;
//!
//! # async fn example() -> Result<(), WorkflowError> {
//! let mut workflow = AssignmentWorkflow::seeded(WorkwiseConfig::new());
//!
//! workflow.open_ai_assist(TicketId(5))?;
//! workflow.set_prompt("Need someone for the chat feature")?;
//! workflow.set_requested_count("2")?;
//! workflow.submit_prompt()?;
//! let top = workflow.resolve_suggestions().await?;
//! println!("best match: {}", top[0].employee.name);
//!
//! workflow.open_assign(EmployeeId(3))?;
//! let record = workflow.confirm_assignment(TicketId(5))?;
//! println!("{}", record.summary());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod assistant;
pub mod board;
pub mod config;
pub mod directory;
pub mod error;
pub mod history;
pub mod report;
pub mod seed;
pub mod suggestion;
pub mod tickets;
pub mod types;
pub mod wizard;
pub mod workflow;

// Re-exports for convenience
pub use assistant::{details_page, ChatAssistant};
pub use board::{BoardCategory, BoardTask, BoardView, IssueDraft, IssueKind, ProjectBoard, TaskHealth};
pub use config::WorkwiseConfig;
pub use directory::{initials, EmployeeDirectory, TeamMember};
pub use error::{BoardError, ConfigError, HistoryError, WizardError, WorkflowError, WorkwiseError};
pub use history::{AssignmentHistory, AssignmentRecord};
pub use report::{
    AiReport, BugRecord, Complexity, Confidence, DeveloperProfile, ReportFilter, WorkItem,
};
pub use suggestion::{MockSuggestionEngine, SuggestionCount, SuggestionEngine};
pub use tickets::TicketStore;
pub use types::{
    Employee, EmployeeId, EmployeeStatus, ParseLabelError, Priority, Suggestion, Ticket, TicketId,
    TicketStatus,
};
pub use wizard::{DocumentSelection, Member, MemberRole, StepView, WorkspaceSetup};
pub use workflow::{AssignmentWorkflow, SuccessNotice, WorkflowPhase, WorkflowState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with WorkWise Core
    pub use crate::{
        AssignmentWorkflow, EmployeeDirectory, EmployeeId, ReportFilter, SuggestionCount,
        SuggestionEngine, Ticket, TicketId, TicketStore, WorkflowError, WorkflowPhase,
        WorkwiseConfig,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn dashboard_flow_updates_team_view() {
        let config = WorkwiseConfig::new().with_suggestion_delay(Duration::ZERO);
        let mut workflow = AssignmentWorkflow::seeded(config);

        workflow.open_assign(EmployeeId(5)).unwrap();
        workflow.confirm_assignment(TicketId(8)).unwrap();
        workflow.finish().unwrap();

        let team = workflow.directory().team_view(workflow.tickets());
        let sneha = team.iter().find(|m| m.employee.name == "Sneha Reddy").unwrap();
        assert_eq!(sneha.assigned_tickets, vec!["TK008".to_string()]);
        assert_eq!(workflow.unassigned_tickets().len(), 3);
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
