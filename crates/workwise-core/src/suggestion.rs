//! Suggestion engine
//!
//! The engine seam the assignment workflow calls to rank employees for a
//! ticket. [`MockSuggestionEngine`] serves a precomputed ranking after a
//! simulated latency; the ticket does not influence the ranking.

use crate::directory::EmployeeDirectory;
use crate::seed;
use crate::types::{Suggestion, Ticket};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many suggestions were requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuggestionCount {
    /// The whole candidate pool
    #[default]
    All,
    /// At most this many (always > 0)
    Top(usize),
}

impl SuggestionCount {
    /// Interpret the free-text count field
    ///
    /// Leading digits are read the way a browser number field is; empty,
    /// non-numeric, zero or negative input means [`SuggestionCount::All`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.starts_with('-') {
            return Self::All;
        }
        let digits: String = text
            .trim_start_matches('+')
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        match digits.parse::<usize>() {
            Ok(0) | Err(_) => Self::All,
            Ok(n) => Self::Top(n),
        }
    }

    /// Number of entries to return from a pool of `available`
    #[inline]
    #[must_use]
    pub fn limit(&self, available: usize) -> usize {
        match self {
            Self::All => available,
            Self::Top(n) => (*n).min(available),
        }
    }
}

/// Ranks employees for a ticket
#[async_trait]
pub trait SuggestionEngine: Send + Sync + std::fmt::Debug {
    /// Suggestions for `ticket`, best match first, at most `count` long
    async fn suggest(&self, ticket: Ticket, count: SuggestionCount) -> Vec<Suggestion>;
}

/// Fixed-ranking engine with simulated latency
#[derive(Debug, Clone)]
pub struct MockSuggestionEngine {
    pool: Vec<Suggestion>,
    delay: Duration,
}

impl MockSuggestionEngine {
    /// Create an engine over a candidate pool; the pool is ranked by score
    #[must_use]
    pub fn new(mut pool: Vec<Suggestion>, delay: Duration) -> Self {
        pool.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Self { pool, delay }
    }

    /// Engine over the seeded ranking, resolved against `directory`
    ///
    /// Ranked entries whose employee is missing from the directory are
    /// skipped.
    #[must_use]
    pub fn seeded(directory: &EmployeeDirectory, delay: Duration) -> Self {
        let pool = seed::ranked_candidates()
            .into_iter()
            .filter_map(|candidate| {
                let Some(employee) = directory.get(candidate.employee_id) else {
                    tracing::warn!(employee_id = %candidate.employee_id, "ranked candidate not in directory");
                    return None;
                };
                Some(Suggestion::new(
                    employee.clone(),
                    candidate.reasons,
                    candidate.match_score,
                ))
            })
            .collect();
        Self::new(pool, delay)
    }

    /// The full ranked pool
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Suggestion] {
        &self.pool
    }

    /// Simulated latency
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Ranked slice without the latency
    #[must_use]
    pub fn ranked(&self, count: SuggestionCount) -> Vec<Suggestion> {
        self.pool[..count.limit(self.pool.len())].to_vec()
    }
}

#[async_trait]
impl SuggestionEngine for MockSuggestionEngine {
    async fn suggest(&self, ticket: Ticket, count: SuggestionCount) -> Vec<Suggestion> {
        tracing::debug!(ticket = %ticket.code, ?count, delay = ?self.delay, "ranking candidates");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.ranked(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, EmployeeStatus, Priority};

    #[test]
    fn parse_count_field() {
        assert_eq!(SuggestionCount::parse("2"), SuggestionCount::Top(2));
        assert_eq!(SuggestionCount::parse(" 3 "), SuggestionCount::Top(3));
        assert_eq!(SuggestionCount::parse("2.9"), SuggestionCount::Top(2));
        assert_eq!(SuggestionCount::parse("+1"), SuggestionCount::Top(1));
        assert_eq!(SuggestionCount::parse(""), SuggestionCount::All);
        assert_eq!(SuggestionCount::parse("0"), SuggestionCount::All);
        assert_eq!(SuggestionCount::parse("-1"), SuggestionCount::All);
        assert_eq!(SuggestionCount::parse("many"), SuggestionCount::All);
    }

    #[test]
    fn blank_count_field_means_default() {
        assert_eq!(SuggestionCount::default(), SuggestionCount::All);
        assert_eq!(SuggestionCount::parse(""), SuggestionCount::default());
    }

    #[test]
    fn limit_clamps_to_pool() {
        assert_eq!(SuggestionCount::Top(10).limit(3), 3);
        assert_eq!(SuggestionCount::Top(1).limit(3), 1);
        assert_eq!(SuggestionCount::All.limit(3), 3);
    }

    #[test]
    fn new_ranks_pool_by_score() {
        let low = Employee::new(1, "Low", "r", "l@x.io", EmployeeStatus::Busy);
        let high = Employee::new(2, "High", "r", "h@x.io", EmployeeStatus::Available);
        let engine = MockSuggestionEngine::new(
            vec![Suggestion::new(low, vec![], 10), Suggestion::new(high, vec![], 90)],
            Duration::ZERO,
        );
        assert_eq!(engine.pool()[0].employee.name, "High");
    }

    #[tokio::test]
    async fn seeded_engine_returns_top_two() {
        let engine = MockSuggestionEngine::seeded(&EmployeeDirectory::seeded(), Duration::ZERO);
        let ticket = Ticket::new(5, "TK005", "t", "d", Priority::Medium);

        let top = engine.suggest(ticket.clone(), SuggestionCount::Top(2)).await;
        let names: Vec<_> = top.iter().map(|s| s.employee.name.as_str()).collect();
        assert_eq!(names, vec!["Anita Patel", "Priya Sharma"]);

        let all = engine.suggest(ticket, SuggestionCount::All).await;
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn seeded_skips_unknown_employees() {
        let directory = EmployeeDirectory::new(seed::employees().into_iter().take(1).collect());
        let engine = MockSuggestionEngine::seeded(&directory, Duration::ZERO);
        assert_eq!(engine.pool().len(), 1);
        assert_eq!(engine.pool()[0].match_score, 87);
    }
}
