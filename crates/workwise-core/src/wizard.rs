//! Workspace setup wizard
//!
//! Four ordered steps:
//! 1. Create Organization
//! 2. Invite Members
//! 3. Create Project (with an optional PDF brief)
//! 4. Setup Tracing
//!
//! Steps only move forward, one at a time.

use crate::error::WizardError;
use crate::seed;
use serde::{Deserialize, Serialize};
use std::fmt;

const STEP_TITLES: [&str; 4] = [
    "Create Organization",
    "Invite Members",
    "Create Project",
    "Setup Tracing",
];

/// Role of a workspace member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemberRole {
    Owner,
    Admin,
    #[default]
    Member,
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MemberRole::Owner => "Owner",
            MemberRole::Admin => "Admin",
            MemberRole::Member => "Member",
        })
    }
}

/// Workspace member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
}

/// Project brief attached on the project step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSelection {
    pub file_name: String,
    pub media_type: String,
}

/// One entry of the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub number: u8,
    pub title: &'static str,
    pub active: bool,
    pub completed: bool,
}

/// Wizard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSetup {
    step: u8,
    organization: Option<String>,
    members: Vec<Member>,
    document: Option<DocumentSelection>,
}

impl Default for WorkspaceSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceSetup {
    /// Fresh wizard on step 1 with the workspace owner as the only member
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: 1,
            organization: None,
            members: vec![seed::workspace_owner()],
            document: None,
        }
    }

    /// Current step number (1-4)
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> u8 {
        self.step
    }

    #[inline]
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&DocumentSelection> {
        self.document.as_ref()
    }

    /// Step indicator; the last step is never shown as completed
    #[must_use]
    pub fn steps(&self) -> Vec<StepView> {
        (1u8..)
            .zip(STEP_TITLES)
            .map(|(number, title)| StepView {
                number,
                title,
                active: number == self.step,
                completed: number < self.step && usize::from(number) < STEP_TITLES.len(),
            })
            .collect()
    }

    /// Name the organization and move to "Invite Members"
    ///
    /// A blank name changes nothing.
    ///
    /// # Errors
    /// - `WizardError::IllegalStep` when not on step 1
    pub fn create_organization(&mut self, name: &str) -> Result<(), WizardError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        self.advance(1, 2)?;
        self.organization = Some(name.to_string());
        Ok(())
    }

    /// Invite a member by e-mail; blank e-mails are ignored
    ///
    /// The member's name is the part before `@`. Returns the new id.
    pub fn add_member(&mut self, email: &str, role: Option<MemberRole>) -> Option<u32> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        let id = self.members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.members.push(Member {
            id,
            name,
            email: email.to_string(),
            role: role.unwrap_or_default(),
        });
        Some(id)
    }

    /// Remove a member; returns whether one was removed
    pub fn remove_member(&mut self, id: u32) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }

    /// "Invite Members" to "Create Project"
    ///
    /// # Errors
    /// - `WizardError::IllegalStep` when not on step 2
    pub fn continue_to_project(&mut self) -> Result<(), WizardError> {
        self.advance(2, 3)
    }

    /// "Create Project" to "Setup Tracing"
    ///
    /// # Errors
    /// - `WizardError::IllegalStep` when not on step 3
    pub fn continue_to_tracing(&mut self) -> Result<(), WizardError> {
        self.advance(3, 4)
    }

    /// Attach the project brief
    ///
    /// Only PDFs are accepted, by media type or `.pdf` extension.
    ///
    /// # Errors
    /// - `WizardError::UnsupportedDocument` for anything else; the previous
    ///   selection is kept
    /// - `WizardError::IllegalStep` when not on step 3
    pub fn attach_document(&mut self, file_name: &str, media_type: &str) -> Result<(), WizardError> {
        if self.step != 3 {
            return Err(WizardError::IllegalStep { from: self.step, to: 3 });
        }
        if !is_pdf(file_name, media_type) {
            tracing::warn!(file_name, media_type, "rejected non-PDF upload");
            return Err(WizardError::UnsupportedDocument {
                file_name: file_name.to_string(),
            });
        }
        self.document = Some(DocumentSelection {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
        });
        Ok(())
    }

    fn advance(&mut self, from: u8, to: u8) -> Result<(), WizardError> {
        if self.step != from {
            return Err(WizardError::IllegalStep { from: self.step, to });
        }
        tracing::debug!(from, to, "wizard step");
        self.step = to;
        Ok(())
    }
}

fn is_pdf(file_name: &str, media_type: &str) -> bool {
    media_type.eq_ignore_ascii_case("application/pdf")
        || std::path::Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn on_project_step() -> WorkspaceSetup {
        let mut setup = WorkspaceSetup::new();
        setup.create_organization("Acme").unwrap();
        setup.continue_to_project().unwrap();
        setup
    }

    #[test]
    fn blank_organization_stays_on_step_one() {
        let mut setup = WorkspaceSetup::new();
        setup.create_organization("   ").unwrap();
        assert_eq!(setup.current_step(), 1);
        assert_eq!(setup.organization(), None);
    }

    #[test]
    fn step_projection() {
        let mut setup = on_project_step();
        setup.continue_to_tracing().unwrap();
        let steps = setup.steps();
        assert_eq!(
            steps.iter().map(|s| (s.number, s.active, s.completed)).collect::<Vec<_>>(),
            vec![(1, false, true), (2, false, true), (3, false, true), (4, true, false)]
        );
        assert_eq!(steps[1].title, "Invite Members");
    }

    #[test]
    fn members_are_added_and_removed() {
        let mut setup = WorkspaceSetup::new();
        assert_eq!(setup.members()[0].role, MemberRole::Owner);

        let id = setup.add_member("dev.one@acme.io", None).unwrap();
        assert_eq!(id, 2);
        let member = &setup.members()[1];
        assert_eq!(member.name, "dev.one");
        assert_eq!(member.role, MemberRole::Member);

        assert_eq!(setup.add_member("  ", Some(MemberRole::Admin)), None);
        assert!(setup.remove_member(1));
        assert!(!setup.remove_member(1));
        assert_eq!(setup.add_member("ops@acme.io", Some(MemberRole::Admin)), Some(3));
    }

    #[test]
    fn steps_must_follow_order() {
        let mut setup = WorkspaceSetup::new();
        assert_eq!(
            setup.continue_to_tracing(),
            Err(WizardError::IllegalStep { from: 1, to: 4 })
        );
        setup.create_organization("Acme").unwrap();
        assert!(setup.create_organization("Other").is_err());
        assert_eq!(setup.organization(), Some("Acme"));
    }

    #[test]
    fn only_pdf_documents_are_accepted() {
        let mut setup = on_project_step();
        setup.attach_document("brief.PDF", "").unwrap();
        setup.attach_document("scan", "application/pdf").unwrap();

        let err = setup
            .attach_document("notes.docx", "application/msword")
            .unwrap_err();
        assert!(err.is_user_facing());
        assert_eq!(setup.document().map(|d| d.file_name.as_str()), Some("scan"));
    }
}
