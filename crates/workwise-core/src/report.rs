//! AI report table
//!
//! Reports summarize past AI analyses of tickets together with the top
//! developers the analysis recommended. The table is filtered by a free-text
//! search and optional priority/complexity selectors; a selected report can
//! be drilled into to see which parts of a developer's history are relevant
//! to the report's recommended skills.

use crate::types::{EmployeeStatus, ParseLabelError, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estimated technical complexity of a report's ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    /// Routine work
    Basic,
    /// Some domain knowledge required
    Intermediate,
    /// Specialist work
    Advanced,
    /// Rare expertise
    Expert,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
            Complexity::Expert => "Expert",
        };
        f.pad(label)
    }
}

impl FromStr for Complexity {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Complexity::Basic),
            "intermediate" => Ok(Complexity::Intermediate),
            "advanced" => Ok(Complexity::Advanced),
            "expert" => Ok(Complexity::Expert),
            _ => Err(ParseLabelError::new("complexity", s)),
        }
    }
}

/// How sure the analysis was of its recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
    /// Very high
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Completed piece of work in a developer's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Ticket number
    pub ticket: String,
    /// Title
    pub title: String,
    /// Outcome
    pub status: String,
    /// Elapsed time, free text
    pub duration: String,
    /// Client the work was done for
    pub client: String,
    /// Client rating out of 5
    pub rating: f32,
}

/// Bug a developer resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugRecord {
    /// Bug number
    pub bug: String,
    /// Title
    pub title: String,
    /// Severity
    pub severity: Priority,
    /// Whether it was resolved
    pub resolved: bool,
    /// Time to resolve, free text
    pub time_to_resolve: String,
    /// Affected area
    pub impact: String,
}

/// Developer recommended by a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub id: u32,
    pub name: String,
    pub skill_match: u8,
    pub experience: String,
    pub rating: f32,
    pub completed_tickets: u32,
    pub bugs_solved: u32,
    pub current_status: EmployeeStatus,
    pub hourly_rate: String,
    pub location: String,
    pub skills: Vec<String>,
    pub recent_work: Vec<WorkItem>,
    pub bug_history: Vec<BugRecord>,
    pub achievements: Vec<String>,
    pub workload: String,
}

impl DeveloperProfile {
    /// Two-letter avatar label built from the name's initials
    #[must_use]
    pub fn avatar(&self) -> String {
        crate::directory::initials(&self.name)
    }
}

/// One row of the AI report table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReport {
    pub id: u32,
    pub ticket_number: String,
    pub ticket_description: String,
    pub user_query: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub ai_rating: f32,
    pub priority: Priority,
    pub complexity: Complexity,
    pub estimated_hours: u32,
    pub recommended_skills: Vec<String>,
    pub match_score: u8,
    pub status: String,
    pub timestamp: String,
    pub confidence: Confidence,
    pub category: String,
    pub top_developers: Vec<DeveloperProfile>,
}

impl AiReport {
    /// Find a recommended developer by name (case-insensitive)
    #[must_use]
    pub fn developer(&self, name: &str) -> Option<&DeveloperProfile> {
        self.top_developers
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Recent work whose title mentions any recommended skill
    #[must_use]
    pub fn relevant_work<'a>(&self, developer: &'a DeveloperProfile) -> Vec<&'a WorkItem> {
        developer
            .recent_work
            .iter()
            .filter(|w| self.mentions_skill(&w.title))
            .collect()
    }

    /// Bug history whose title mentions any recommended skill
    #[must_use]
    pub fn relevant_bugs<'a>(&self, developer: &'a DeveloperProfile) -> Vec<&'a BugRecord> {
        developer
            .bug_history
            .iter()
            .filter(|b| self.mentions_skill(&b.title))
            .collect()
    }

    fn mentions_skill(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.recommended_skills
            .iter()
            .any(|skill| title.contains(&skill.to_lowercase()))
    }
}

/// Active filters of the report table
///
/// All active filters are combined with logical AND. An empty search term
/// and `None` selectors match every report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Case-insensitive substring of the ticket number or user query
    pub search: String,
    /// Exact priority
    pub priority: Option<Priority>,
    /// Exact complexity
    pub complexity: Option<Complexity>,
}

impl ReportFilter {
    /// Filter that matches everything
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search term
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// With priority selector
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// With complexity selector
    #[inline]
    #[must_use]
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Check a single report against every active filter
    #[must_use]
    pub fn matches(&self, report: &AiReport) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = report.ticket_number.to_lowercase().contains(&needle)
            || report.user_query.to_lowercase().contains(&needle);
        let matches_priority = self.priority.map_or(true, |p| report.priority == p);
        let matches_complexity = self.complexity.map_or(true, |c| report.complexity == c);
        matches_search && matches_priority && matches_complexity
    }

    /// Reports that pass the filter, in table order
    #[must_use]
    pub fn apply<'a>(&self, reports: &'a [AiReport]) -> Vec<&'a AiReport> {
        reports.iter().filter(|r| self.matches(r)).collect()
    }
}
