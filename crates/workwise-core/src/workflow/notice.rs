//! Transient success notice shown after an assignment

use std::time::Duration;
use tokio::time::Instant;

/// Message that disappears once its display duration has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    /// Headline
    pub title: String,
    /// Detail line, e.g. `TK005 assigned to Anita Patel`
    pub message: String,
    expires_at: Instant,
}

impl SuccessNotice {
    pub(crate) fn new(message: impl Into<String>, display_for: Duration) -> Self {
        Self {
            title: "Assignment Successful!".to_string(),
            message: message.into(),
            expires_at: Instant::now() + display_for,
        }
    }

    /// Whether the notice is still on screen
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        Instant::now() < self.expires_at
    }

    /// Time left before auto-dismissal
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notice_expires_after_duration() {
        let notice = SuccessNotice::new("TK005 assigned to Anita Patel", Duration::from_secs(3));
        assert!(notice.is_visible());
        assert_eq!(notice.remaining(), Duration::from_secs(3));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(notice.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!notice.is_visible());
        assert_eq!(notice.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_never_visible() {
        let notice = SuccessNotice::new("x", Duration::ZERO);
        assert!(!notice.is_visible());
    }
}
