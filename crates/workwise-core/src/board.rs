//! Project board
//!
//! Tasks grouped by category, with quick issue creation and moves between
//! columns.

use crate::error::BoardError;
use crate::seed;
use crate::types::{ParseLabelError, Priority};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardCategory {
    /// Not started
    #[serde(rename = "To do")]
    ToDo,
    /// Being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Awaiting review
    Review,
    /// Finished
    Done,
}

impl BoardCategory {
    /// Every category in column order
    pub const ALL: [BoardCategory; 4] = [
        BoardCategory::ToDo,
        BoardCategory::InProgress,
        BoardCategory::Review,
        BoardCategory::Done,
    ];

    /// Column heading
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BoardCategory::ToDo => "To do",
            BoardCategory::InProgress => "In Progress",
            BoardCategory::Review => "Review",
            BoardCategory::Done => "Done",
        }
    }
}

impl fmt::Display for BoardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Schedule health of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskHealth {
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "At risk")]
    AtRisk,
    #[serde(rename = "Off track")]
    OffTrack,
}

impl fmt::Display for TaskHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TaskHealth::OnTrack => "On track",
            TaskHealth::AtRisk => "At risk",
            TaskHealth::OffTrack => "Off track",
        })
    }
}

/// Issue type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueKind {
    #[default]
    Story,
    Task,
    Bug,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            IssueKind::Story => "Story",
            IssueKind::Task => "Task",
            IssueKind::Bug => "Bug",
        })
    }
}

/// Board presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardView {
    /// Rows grouped under category headings
    #[default]
    List,
    /// One column per category
    Board,
    Timeline,
    Calendar,
}

impl FromStr for BoardView {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(BoardView::List),
            "board" => Ok(BoardView::Board),
            "timeline" => Ok(BoardView::Timeline),
            "calendar" => Ok(BoardView::Calendar),
            _ => Err(ParseLabelError::new("board view", s)),
        }
    }
}

/// Task on the project board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTask {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub assignee: String,
    /// Free-text due range, e.g. `14 - 16 Jul`
    pub due: String,
    pub priority: Priority,
    pub health: TaskHealth,
    pub category: BoardCategory,
    pub kind: IssueKind,
}

/// Input of the "create issue" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub category: BoardCategory,
    pub kind: IssueKind,
}

impl IssueDraft {
    /// Story in "To do" with medium priority
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            priority: Priority::Medium,
            category: BoardCategory::ToDo,
            kind: IssueKind::Story,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: BoardCategory) -> Self {
        self.category = category;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: IssueKind) -> Self {
        self.kind = kind;
        self
    }
}

/// In-memory project board
#[derive(Debug, Clone, Default)]
pub struct ProjectBoard {
    tasks: Vec<BoardTask>,
}

impl ProjectBoard {
    /// Board over the given tasks
    #[must_use]
    pub fn new(tasks: Vec<BoardTask>) -> Self {
        Self { tasks }
    }

    /// Board with the seeded tasks
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::board_tasks())
    }

    /// All tasks in creation order
    #[inline]
    #[must_use]
    pub fn tasks(&self) -> &[BoardTask] {
        &self.tasks
    }

    /// Look up a task
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&BoardTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from the form
    ///
    /// Returns `None` and changes nothing when the name is blank.
    pub fn create_issue(&mut self, draft: IssueDraft) -> Option<u32> {
        let name = draft.name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(BoardTask {
            id,
            name: name.to_string(),
            description: draft.description,
            assignee: "User".to_string(),
            due: "Today".to_string(),
            priority: draft.priority,
            health: TaskHealth::OnTrack,
            category: draft.category,
            kind: draft.kind,
        });
        tracing::debug!(id, category = %draft.category, "issue created");
        Some(id)
    }

    /// Move a task to another column
    ///
    /// # Errors
    /// - `BoardError::UnknownTask` if no task has this id
    pub fn move_task(&mut self, id: u32, category: BoardCategory) -> Result<(), BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::UnknownTask(id))?;
        task.category = category;
        Ok(())
    }

    /// Tasks grouped by category, every category present in column order
    #[must_use]
    pub fn by_category(&self) -> IndexMap<BoardCategory, Vec<&BoardTask>> {
        let mut groups: IndexMap<_, Vec<_>> =
            BoardCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();
        for task in &self.tasks {
            groups.entry(task.category).or_default().push(task);
        }
        groups
    }
}
