use proptest::prelude::*;
use workwise_core::workflow::{allowed_transitions, validate_transition};
use workwise_core::WorkflowPhase;

#[test]
fn test_prompt_entry_transitions() {
    assert!(validate_transition(WorkflowPhase::PromptEntry, WorkflowPhase::Loading, "submit").is_ok());
    assert!(validate_transition(WorkflowPhase::PromptEntry, WorkflowPhase::AssignmentPending, "assign").is_ok());

    assert!(validate_transition(WorkflowPhase::PromptEntry, WorkflowPhase::Committed, "confirm").is_err());
    assert!(validate_transition(WorkflowPhase::PromptEntry, WorkflowPhase::SuggestionsReady, "resolve").is_err());
}

#[test]
fn test_loading_transitions() {
    assert!(validate_transition(WorkflowPhase::Loading, WorkflowPhase::SuggestionsReady, "resolve").is_ok());

    assert!(validate_transition(WorkflowPhase::Loading, WorkflowPhase::Loading, "submit").is_err());
    assert!(validate_transition(WorkflowPhase::Loading, WorkflowPhase::AssignmentPending, "assign").is_err());
}

#[test]
fn test_committed_transitions() {
    assert!(validate_transition(WorkflowPhase::Committed, WorkflowPhase::Idle, "finish").is_ok());
    assert!(validate_transition(WorkflowPhase::Committed, WorkflowPhase::AssignmentPending, "assign").is_ok());
    assert!(validate_transition(WorkflowPhase::Committed, WorkflowPhase::Committed, "confirm").is_err());
}

fn any_phase() -> impl Strategy<Value = WorkflowPhase> {
    prop::sample::select(WorkflowPhase::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_validation_agrees_with_table(from in any_phase(), to in any_phase()) {
        let res = validate_transition(from, to, "act");
        let allowed = allowed_transitions(from);

        if res.is_ok() {
            prop_assert!(allowed.contains(&to));
        } else {
            prop_assert!(!allowed.contains(&to));
        }
    }

    #[test]
    fn prop_rejection_names_current_phase(from in any_phase(), to in any_phase()) {
        if let Err(err) = validate_transition(from, to, "act") {
            prop_assert!(err.to_string().ends_with(from.name()));
        }
    }
}
