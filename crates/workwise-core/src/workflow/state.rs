//! Workflow states and the transition table
//!
//! [`WorkflowState`] carries the data each step needs, so combinations such
//! as "loading and ready" cannot be expressed. [`WorkflowPhase`] is its
//! field-less projection used for the transition table.

use crate::error::WorkflowError;
use crate::history::AssignmentRecord;
use crate::suggestion::SuggestionCount;
use crate::types::{Employee, Suggestion, Ticket};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

/// Step of the assignment workflow, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowPhase {
    /// No panel open
    Idle,
    /// AI panel open, prompt being typed
    PromptEntry,
    /// Suggestion request in flight
    Loading,
    /// Suggestions shown
    SuggestionsReady,
    /// "Assign task" panel open for an employee
    AssignmentPending,
    /// Assignment just confirmed
    Committed,
}

impl WorkflowPhase {
    /// Every phase, in workflow order
    pub const ALL: [WorkflowPhase; 6] = [
        WorkflowPhase::Idle,
        WorkflowPhase::PromptEntry,
        WorkflowPhase::Loading,
        WorkflowPhase::SuggestionsReady,
        WorkflowPhase::AssignmentPending,
        WorkflowPhase::Committed,
    ];

    /// Human-readable name used in error messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowPhase::Idle => "idle",
            WorkflowPhase::PromptEntry => "entering a prompt",
            WorkflowPhase::Loading => "loading suggestions",
            WorkflowPhase::SuggestionsReady => "reviewing suggestions",
            WorkflowPhase::AssignmentPending => "assigning a ticket",
            WorkflowPhase::Committed => "showing a committed assignment",
        }
    }
}

/// Phases reachable from `from` through a regular action
///
/// `cancel` is not listed: it is accepted from every phase.
#[must_use]
pub fn allowed_transitions(from: WorkflowPhase) -> Vec<WorkflowPhase> {
    use WorkflowPhase::*;
    match from {
        Idle => vec![PromptEntry, AssignmentPending],
        PromptEntry => vec![PromptEntry, Loading, AssignmentPending],
        Loading => vec![SuggestionsReady, PromptEntry],
        SuggestionsReady => vec![PromptEntry, AssignmentPending],
        AssignmentPending => vec![Committed, Idle, PromptEntry, SuggestionsReady],
        Committed => vec![Idle, PromptEntry, AssignmentPending],
    }
}

/// Check that `action` may move the workflow from `from` to `to`
///
/// # Errors
/// - `WorkflowError::IllegalTransition` if `to` is not in
///   [`allowed_transitions`] for `from`
pub fn validate_transition(
    from: WorkflowPhase,
    to: WorkflowPhase,
    action: &'static str,
) -> Result<(), WorkflowError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(WorkflowError::IllegalTransition {
            from: from.name(),
            action,
        })
    }
}

/// AI panel while the prompt is being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPanel {
    /// Ticket the panel was opened for
    pub ticket: Ticket,
    /// Free-text prompt
    pub prompt: String,
    /// Raw "number of suggestions" field
    pub count_text: String,
}

impl PromptPanel {
    pub(crate) fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            prompt: String::new(),
            count_text: String::new(),
        }
    }
}

/// AI panel while the engine is working
#[derive(Debug)]
pub struct LoadingPanel {
    /// Input that was submitted
    pub input: PromptPanel,
    /// Parsed count
    pub count: SuggestionCount,
    pub(crate) task: JoinHandle<Vec<Suggestion>>,
}

/// AI panel with results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPanel {
    /// Input that produced the suggestions
    pub input: PromptPanel,
    /// Ranked suggestions
    pub suggestions: Vec<Suggestion>,
}

/// What the assign panel returns to when it is closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Nothing open behind the assign panel
    Idle,
    /// Prompt entry left open
    Prompt(PromptPanel),
    /// Suggestions left on screen
    Ready(ReadyPanel),
}

/// "Assign task" panel for one employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignPanel {
    /// Employee tickets will be assigned to
    pub employee: Employee,
    /// AI panel state kept behind the assign panel
    pub background: Background,
}

/// Full workflow state
#[derive(Debug, Default)]
pub enum WorkflowState {
    /// No panel open
    #[default]
    Idle,
    /// Prompt being typed
    PromptEntry(PromptPanel),
    /// Suggestion task in flight
    Loading(LoadingPanel),
    /// Suggestions shown
    SuggestionsReady(ReadyPanel),
    /// Assign panel open
    AssignmentPending(AssignPanel),
    /// Assignment confirmed
    Committed(AssignmentRecord),
}

impl WorkflowState {
    /// Field-less projection
    #[must_use]
    pub fn phase(&self) -> WorkflowPhase {
        match self {
            WorkflowState::Idle => WorkflowPhase::Idle,
            WorkflowState::PromptEntry(_) => WorkflowPhase::PromptEntry,
            WorkflowState::Loading(_) => WorkflowPhase::Loading,
            WorkflowState::SuggestionsReady(_) => WorkflowPhase::SuggestionsReady,
            WorkflowState::AssignmentPending(_) => WorkflowPhase::AssignmentPending,
            WorkflowState::Committed(_) => WorkflowPhase::Committed,
        }
    }

    /// Ticket currently selected in the AI panel, if any
    #[must_use]
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        match self {
            WorkflowState::PromptEntry(p) => Some(&p.ticket),
            WorkflowState::Loading(l) => Some(&l.input.ticket),
            WorkflowState::SuggestionsReady(r) => Some(&r.input.ticket),
            WorkflowState::AssignmentPending(a) => match &a.background {
                Background::Prompt(p) => Some(&p.ticket),
                Background::Ready(r) => Some(&r.input.ticket),
                Background::Idle => None,
            },
            WorkflowState::Idle | WorkflowState::Committed(_) => None,
        }
    }

    /// Suggestions visible on screen, if any
    #[must_use]
    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        match self {
            WorkflowState::SuggestionsReady(r) => Some(&r.suggestions),
            WorkflowState::AssignmentPending(AssignPanel {
                background: Background::Ready(r),
                ..
            }) => Some(&r.suggestions),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_transitions() {
        assert!(validate_transition(WorkflowPhase::Idle, WorkflowPhase::PromptEntry, "open").is_ok());
        assert!(validate_transition(WorkflowPhase::Idle, WorkflowPhase::Loading, "submit").is_err());
        assert!(validate_transition(WorkflowPhase::Idle, WorkflowPhase::Committed, "confirm").is_err());
    }

    #[test]
    fn loading_cannot_open_assign() {
        let err = validate_transition(
            WorkflowPhase::Loading,
            WorkflowPhase::AssignmentPending,
            "open assign",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "cannot open assign while loading suggestions");
    }

    #[test]
    fn committed_only_via_assignment() {
        for from in WorkflowPhase::ALL {
            let allowed = allowed_transitions(from).contains(&WorkflowPhase::Committed);
            assert_eq!(allowed, from == WorkflowPhase::AssignmentPending, "{from:?}");
        }
    }

    #[test]
    fn default_state_is_idle() {
        let state = WorkflowState::default();
        assert_eq!(state.phase(), WorkflowPhase::Idle);
        assert!(state.selected_ticket().is_none());
        assert!(state.suggestions().is_none());
    }
}
