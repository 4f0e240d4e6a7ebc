//! Assignment history
//!
//! Append-only audit log of confirmed assignments. Every record carries the
//! hash of its predecessor, so any edit to a past record is detected by
//! [`AssignmentHistory::verify_integrity`].

use crate::error::HistoryError;
use crate::types::{Employee, EmployeeId, Ticket, TicketId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ulid::Ulid;

/// One confirmed assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: Ulid,
    /// Position in the log, starting at 0
    pub sequence: usize,
    pub ticket_id: TicketId,
    pub ticket_code: String,
    pub ticket_title: String,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub assigned_at: DateTime<Utc>,
    pub prev_hash: [u8; 32],
    pub hash: [u8; 32],
}

impl AssignmentRecord {
    /// Hex form of the record hash
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Notice text shown after the assignment
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} assigned to {}", self.ticket_code, self.employee_name)
    }
}

/// Append-only, hash-chained assignment log
#[derive(Debug, Default)]
pub struct AssignmentHistory {
    inner: Mutex<Vec<AssignmentRecord>>,
}

impl AssignmentHistory {
    /// Create an empty history
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `ticket` was assigned to `employee`
    pub fn append(&self, ticket: &Ticket, employee: &Employee) -> AssignmentRecord {
        let mut guard = self.inner.lock();
        let prev_hash = guard.last().map_or([0u8; 32], |r| r.hash);
        let mut record = AssignmentRecord {
            id: Ulid::new(),
            sequence: guard.len(),
            ticket_id: ticket.id,
            ticket_code: ticket.code.clone(),
            ticket_title: ticket.title.clone(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            assigned_at: Utc::now(),
            prev_hash,
            hash: [0u8; 32],
        };
        record.hash = compute_hash(&record);
        guard.push(record.clone());
        record
    }

    /// Snapshot of every record, oldest first
    #[must_use]
    pub fn records(&self) -> Vec<AssignmentRecord> {
        self.inner.lock().clone()
    }

    /// Most recent record
    #[must_use]
    pub fn last(&self) -> Option<AssignmentRecord> {
        self.inner.lock().last().cloned()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether nothing has been assigned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Check the hash chain
    ///
    /// # Errors
    /// - `HistoryError::IntegrityViolation` at the first record whose link or
    ///   hash does not match
    pub fn verify_integrity(&self) -> Result<(), HistoryError> {
        let guard = self.inner.lock();
        let mut prev = [0u8; 32];
        for (sequence, record) in guard.iter().enumerate() {
            if record.sequence != sequence
                || record.prev_hash != prev
                || record.hash != compute_hash(record)
            {
                return Err(HistoryError::IntegrityViolation { sequence });
            }
            prev = record.hash;
        }
        Ok(())
    }
}

fn compute_hash(record: &AssignmentRecord) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(record.id.to_bytes());
    hasher.update((record.sequence as u64).to_le_bytes());
    hasher.update(record.ticket_id.0.to_le_bytes());
    hasher.update(record.ticket_code.as_bytes());
    hasher.update([0]);
    hasher.update(record.ticket_title.as_bytes());
    hasher.update([0]);
    hasher.update(record.employee_id.0.to_le_bytes());
    hasher.update(record.employee_name.as_bytes());
    hasher.update([0]);
    hasher.update(record.assigned_at.timestamp_micros().to_le_bytes());
    hasher.update(record.prev_hash);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn append_two(history: &AssignmentHistory) {
        let tickets = seed::tickets();
        let employees = seed::employees();
        history.append(&tickets[4], &employees[0]);
        history.append(&tickets[5], &employees[1]);
    }

    #[test]
    fn records_are_chained() {
        let history = AssignmentHistory::new();
        append_two(&history);

        let records = history.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prev_hash, [0u8; 32]);
        assert_eq!(records[1].prev_hash, records[0].hash);
        assert_eq!(records[1].sequence, 1);
        assert!(history.verify_integrity().is_ok());
    }

    #[test]
    fn tampering_is_detected() {
        let history = AssignmentHistory::new();
        append_two(&history);

        history.inner.lock()[0].employee_name = "Someone Else".to_string();
        assert_eq!(
            history.verify_integrity(),
            Err(HistoryError::IntegrityViolation { sequence: 0 })
        );
    }

    #[test]
    fn summary_and_hex() {
        let history = AssignmentHistory::new();
        append_two(&history);
        let last = history.last().unwrap();
        assert_eq!(last.summary(), "TK006 assigned to Rajesh Kumar");
        assert_eq!(last.hash_hex().len(), 64);
    }
}
