//! Assignment workflow controller
//!
//! Orchestrates the dashboard assignment sequence:
//! - open the AI panel for a ticket and type a prompt
//! - request ranked suggestions (spawned, cancellable)
//! - open "assign task" for an employee and pick an open ticket
//! - commit the assignment, log it and raise a success notice
//!
//! The controller owns the ticket store; every status/assignee change goes
//! through [`AssignmentWorkflow::confirm_assignment`].

mod notice;
mod state;

pub use notice::SuccessNotice;
pub use state::{
    allowed_transitions, validate_transition, AssignPanel, Background, LoadingPanel,
    PromptPanel, ReadyPanel, WorkflowPhase, WorkflowState,
};

use crate::config::WorkwiseConfig;
use crate::directory::EmployeeDirectory;
use crate::error::WorkflowError;
use crate::history::{AssignmentHistory, AssignmentRecord};
use crate::suggestion::{MockSuggestionEngine, SuggestionCount, SuggestionEngine};
use crate::tickets::TicketStore;
use crate::types::{EmployeeId, Suggestion, Ticket, TicketId};
use std::sync::Arc;

/// Assignment workflow controller
#[derive(Debug)]
pub struct AssignmentWorkflow {
    config: WorkwiseConfig,
    tickets: TicketStore,
    directory: Arc<EmployeeDirectory>,
    engine: Arc<dyn SuggestionEngine>,
    history: Arc<AssignmentHistory>,
    state: WorkflowState,
    notice: Option<SuccessNotice>,
}

impl AssignmentWorkflow {
    /// Create a controller over the given collaborators
    #[must_use]
    pub fn new(
        config: WorkwiseConfig,
        tickets: TicketStore,
        directory: Arc<EmployeeDirectory>,
        engine: Arc<dyn SuggestionEngine>,
    ) -> Self {
        Self {
            config,
            tickets,
            directory,
            engine,
            history: Arc::new(AssignmentHistory::new()),
            state: WorkflowState::Idle,
            notice: None,
        }
    }

    /// Controller over the seeded tickets, roster and ranking
    #[must_use]
    pub fn seeded(config: WorkwiseConfig) -> Self {
        let directory = Arc::new(EmployeeDirectory::seeded());
        let engine = Arc::new(MockSuggestionEngine::seeded(
            &directory,
            config.suggestion_delay(),
        ));
        Self::new(config, TicketStore::seeded(), directory, engine)
    }

    /// Share an existing history log
    #[inline]
    #[must_use]
    pub fn with_history(mut self, history: Arc<AssignmentHistory>) -> Self {
        self.history = history;
        self
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> WorkflowPhase {
        self.state.phase()
    }

    /// Ticket store (read-only)
    #[inline]
    #[must_use]
    pub fn tickets(&self) -> &TicketStore {
        &self.tickets
    }

    /// Employee directory
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &Arc<EmployeeDirectory> {
        &self.directory
    }

    /// Assignment log
    #[inline]
    #[must_use]
    pub fn history(&self) -> &Arc<AssignmentHistory> {
        &self.history
    }

    /// Tickets listed in the "tickets" tab and the assign panel
    #[must_use]
    pub fn unassigned_tickets(&self) -> Vec<&Ticket> {
        self.tickets.unassigned()
    }

    /// Suggestions visible on screen
    #[must_use]
    pub fn suggestions(&self) -> Option<&[Suggestion]> {
        self.state.suggestions()
    }

    /// Whether the "get suggestions" control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.state, WorkflowState::PromptEntry(_))
    }

    /// Whether a suggestion request is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Loading(_))
    }

    /// Open the AI panel for an open ticket
    ///
    /// Prompt, count and any previous suggestions are discarded.
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` while loading or assigning
    /// - `WorkflowError::TicketNotFound` / `TicketNotAssignable`
    pub fn open_ai_assist(&mut self, ticket_id: TicketId) -> Result<(), WorkflowError> {
        const ACTION: &str = "open the AI panel";
        let phase = self.phase();
        // Loading and assigning reach prompt entry only by cancelling or closing.
        if matches!(phase, WorkflowPhase::Loading | WorkflowPhase::AssignmentPending) {
            return Err(WorkflowError::IllegalTransition {
                from: phase.name(),
                action: ACTION,
            });
        }
        validate_transition(phase, WorkflowPhase::PromptEntry, ACTION)?;
        let ticket = self
            .tickets
            .get(ticket_id)
            .ok_or_else(|| WorkflowError::ticket_not_found(ticket_id))?;
        if !ticket.is_unassigned() {
            return Err(WorkflowError::TicketNotAssignable(ticket.code.clone()));
        }

        tracing::debug!(ticket = %ticket.code, "AI panel opened");
        self.state = WorkflowState::PromptEntry(PromptPanel::new(ticket.clone()));
        Ok(())
    }

    /// Update the prompt text
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` outside prompt entry
    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> Result<(), WorkflowError> {
        self.prompt_panel_mut("edit the prompt")?.prompt = prompt.into();
        Ok(())
    }

    /// Update the raw "number of suggestions" field
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` outside prompt entry
    pub fn set_requested_count(&mut self, count: impl Into<String>) -> Result<(), WorkflowError> {
        self.prompt_panel_mut("edit the suggestion count")?.count_text = count.into();
        Ok(())
    }

    /// Submit the prompt and start the suggestion request
    ///
    /// Returns `Ok(false)` without changing anything when the prompt is blank.
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` outside prompt entry (including
    ///   while a request is already loading)
    pub fn submit_prompt(&mut self) -> Result<bool, WorkflowError> {
        validate_transition(self.phase(), WorkflowPhase::Loading, "submit the prompt")?;
        let WorkflowState::PromptEntry(panel) = &self.state else {
            unreachable!("transition table only allows loading from prompt entry");
        };
        if panel.prompt.trim().is_empty() {
            return Ok(false);
        }

        let WorkflowState::PromptEntry(input) = std::mem::take(&mut self.state) else {
            unreachable!("state checked above");
        };
        let count = SuggestionCount::parse(&input.count_text);
        let engine = Arc::clone(&self.engine);
        let ticket = input.ticket.clone();
        tracing::info!(ticket = %ticket.code, ?count, "requesting suggestions");
        let task = tokio::spawn(async move { engine.suggest(ticket, count).await });

        self.state = WorkflowState::Loading(LoadingPanel { input, count, task });
        Ok(true)
    }

    /// Wait for the in-flight request and show its suggestions
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` if nothing is loading
    /// - `WorkflowError::SuggestionTaskFailed` if the task panicked; the
    ///   panel returns to prompt entry with its input intact
    ///
    /// Dropping the returned future before it completes leaves the workflow
    /// loading, with the task still owned by the panel.
    pub async fn resolve_suggestions(&mut self) -> Result<&[Suggestion], WorkflowError> {
        validate_transition(self.phase(), WorkflowPhase::SuggestionsReady, "resolve suggestions")?;
        let WorkflowState::Loading(loading) = &mut self.state else {
            unreachable!("transition table only allows ready from loading");
        };
        let result = (&mut loading.task).await;

        let WorkflowState::Loading(loading) = std::mem::take(&mut self.state) else {
            unreachable!("state is held by &mut self across the await");
        };
        match result {
            Ok(suggestions) => {
                tracing::debug!(count = suggestions.len(), "suggestions ready");
                self.state = WorkflowState::SuggestionsReady(ReadyPanel {
                    input: loading.input,
                    suggestions,
                });
                Ok(self.state.suggestions().unwrap_or_default())
            }
            Err(e) => {
                tracing::warn!(error = %e, "suggestion task failed");
                self.state = WorkflowState::PromptEntry(loading.input);
                Err(WorkflowError::SuggestionTaskFailed(e.to_string()))
            }
        }
    }

    /// Open the "assign task" panel for an employee
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` while loading or already assigning
    /// - `WorkflowError::EmployeeNotFound` if the id is not in the directory
    /// - `WorkflowError::NoUnassignedTickets` if there is nothing to assign;
    ///   state is unchanged
    pub fn open_assign(&mut self, employee_id: EmployeeId) -> Result<(), WorkflowError> {
        validate_transition(self.phase(), WorkflowPhase::AssignmentPending, "open assign")?;
        let employee = self
            .directory
            .get(employee_id)
            .cloned()
            .ok_or(WorkflowError::EmployeeNotFound(employee_id))?;
        if !self.tickets.has_unassigned() {
            tracing::warn!(employee = %employee.name, "no unassigned tickets available");
            return Err(WorkflowError::NoUnassignedTickets);
        }

        let background = match std::mem::take(&mut self.state) {
            WorkflowState::PromptEntry(p) => Background::Prompt(p),
            WorkflowState::SuggestionsReady(r) => Background::Ready(r),
            _ => Background::Idle,
        };
        tracing::debug!(employee = %employee.name, "assign panel opened");
        self.state = WorkflowState::AssignmentPending(AssignPanel {
            employee,
            background,
        });
        Ok(())
    }

    /// Close the assign panel without assigning
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` if the assign panel is not open
    pub fn close_assign(&mut self) -> Result<(), WorkflowError> {
        if self.phase() != WorkflowPhase::AssignmentPending {
            return Err(WorkflowError::IllegalTransition {
                from: self.phase().name(),
                action: "close assign",
            });
        }
        let WorkflowState::AssignmentPending(panel) = std::mem::take(&mut self.state) else {
            unreachable!("phase checked above");
        };
        self.state = match panel.background {
            Background::Idle => WorkflowState::Idle,
            Background::Prompt(p) => WorkflowState::PromptEntry(p),
            Background::Ready(r) => WorkflowState::SuggestionsReady(r),
        };
        Ok(())
    }

    /// Assign an open ticket to the employee of the assign panel
    ///
    /// Appends exactly one history record and raises the success notice.
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` if the assign panel is not open
    /// - `WorkflowError::TicketNotFound` / `TicketNotAssignable`; nothing
    ///   changes
    pub fn confirm_assignment(
        &mut self,
        ticket_id: TicketId,
    ) -> Result<AssignmentRecord, WorkflowError> {
        validate_transition(self.phase(), WorkflowPhase::Committed, "confirm an assignment")?;
        let WorkflowState::AssignmentPending(panel) = &self.state else {
            unreachable!("transition table only allows committed from assigning");
        };

        let ticket = self.tickets.commit_assignment(ticket_id, &panel.employee)?;
        let record = self.history.append(&ticket, &panel.employee);
        tracing::info!(
            ticket = %record.ticket_code,
            employee = %record.employee_name,
            sequence = record.sequence,
            "assignment committed"
        );

        self.notice = Some(SuccessNotice::new(
            record.summary(),
            self.config.notice_duration(),
        ));
        self.state = WorkflowState::Committed(record.clone());
        Ok(record)
    }

    /// Close the panel after a committed assignment
    ///
    /// # Errors
    /// - `WorkflowError::IllegalTransition` unless an assignment was just
    ///   committed
    pub fn finish(&mut self) -> Result<(), WorkflowError> {
        if self.phase() != WorkflowPhase::Committed {
            return Err(WorkflowError::IllegalTransition {
                from: self.phase().name(),
                action: "finish",
            });
        }
        self.state = WorkflowState::Idle;
        Ok(())
    }

    /// Close whatever is open and return to idle
    ///
    /// In-progress input is discarded and an in-flight suggestion request is
    /// aborted, so its result can never be applied.
    pub fn cancel(&mut self) {
        if let WorkflowState::Loading(loading) = std::mem::take(&mut self.state) {
            tracing::debug!(ticket = %loading.input.ticket.code, "aborting suggestion request");
            loading.task.abort();
        }
    }

    /// The success notice, while it is still visible
    #[must_use]
    pub fn notice(&self) -> Option<&SuccessNotice> {
        self.notice.as_ref().filter(|n| n.is_visible())
    }

    /// Drop the notice once its display time is over
    ///
    /// Returns `true` if a notice was dismissed.
    pub fn dismiss_expired_notice(&mut self) -> bool {
        if self.notice.as_ref().is_some_and(|n| !n.is_visible()) {
            self.notice = None;
            return true;
        }
        false
    }

    fn prompt_panel_mut(&mut self, action: &'static str) -> Result<&mut PromptPanel, WorkflowError> {
        let from = self.phase().name();
        match &mut self.state {
            WorkflowState::PromptEntry(panel) => Ok(panel),
            _ => Err(WorkflowError::IllegalTransition { from, action }),
        }
    }
}

impl Drop for AssignmentWorkflow {
    fn drop(&mut self) {
        if let WorkflowState::Loading(loading) = &self.state {
            loading.task.abort();
        }
    }
}
