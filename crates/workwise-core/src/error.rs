//! Error types for WorkWise Core
//!
//! Provides error handling for:
//! - Assignment workflow transitions
//! - Workspace setup wizard steps and uploads
//! - Project board edits
//! - Assignment history integrity
//! - Configuration loading

use crate::types::{EmployeeId, TicketId};
use std::path::PathBuf;

/// Main WorkWise error type
#[derive(Debug, thiserror::Error)]
pub enum WorkwiseError {
    /// Assignment workflow rejected an action
    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Workspace setup wizard rejected an action
    #[error("wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Project board rejected an edit
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// Assignment history is inconsistent
    #[error("history error: {0}")]
    History(#[from] HistoryError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WorkwiseError {
    /// Check if the error is an alert the user is expected to see and dismiss
    #[inline]
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::Workflow(e) => e.is_user_facing(),
            Self::Wizard(e) => e.is_user_facing(),
            Self::Board(_) | Self::History(_) | Self::Config(_) => false,
        }
    }
}

/// Assignment workflow errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// "Assign Task" was requested but every ticket already has an owner
    #[error("no unassigned tickets available")]
    NoUnassignedTickets,

    /// The action is not valid from the current state
    #[error("cannot {action} while {from}")]
    IllegalTransition {
        /// Name of the state the workflow was in
        from: &'static str,
        /// Name of the rejected action
        action: &'static str,
    },

    /// Ticket does not exist in the store
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    /// Ticket exists but is not in the unassigned set
    #[error("ticket {0} is not open for assignment")]
    TicketNotAssignable(String),

    /// Employee is not in the directory
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// The background suggestion task ended without a result
    #[error("suggestion task failed: {0}")]
    SuggestionTaskFailed(String),
}

impl WorkflowError {
    /// Check if the error is surfaced to the user as a blocking alert
    #[inline]
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NoUnassignedTickets)
    }

    pub(crate) fn ticket_not_found(id: TicketId) -> Self {
        Self::TicketNotFound(id.to_string())
    }
}

/// Workspace setup wizard errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Uploaded document is not a PDF
    #[error("please upload a PDF document (got {file_name})")]
    UnsupportedDocument {
        /// Name of the rejected file
        file_name: String,
    },

    /// Step change requested out of order
    #[error("cannot move from step {from} to step {to}")]
    IllegalStep {
        /// Current step number
        from: u8,
        /// Requested step number
        to: u8,
    },
}

impl WizardError {
    /// Check if the error is surfaced to the user as a blocking alert
    #[inline]
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::UnsupportedDocument { .. })
    }
}

/// Project board errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Task id not present on the board
    #[error("unknown board task: {0}")]
    UnknownTask(u32),
}

/// Assignment history errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// Hash chain broken at the given record
    #[error("history integrity violation at record {sequence}")]
    IntegrityViolation {
        /// Position of the first inconsistent record
        sequence: usize,
    },
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::WorkwiseConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
