// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked repeating task.

/// Fires every `interval_ms`, driven by timestamps the host passes to
/// [`RepeatingTask::poll`].
///
/// Missed periods are skipped, not replayed. Dropping the task cancels it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatingTask {
    interval_ms: u64,
    next_due_ms: u64,
}

impl RepeatingTask {
    /// Schedule the first run at `now_ms + interval_ms`.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
        }
    }

    /// Period in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Time of the next run.
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Whether the task is due at `now_ms`. Reschedules when it is.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.interval_ms;
        self.next_due_ms += (missed + 1) * self.interval_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut t = RepeatingTask::new(500, 0);
        assert!(!t.poll(499));
        assert!(t.poll(500));
        assert!(!t.poll(600));
        assert!(t.poll(1000));
        assert_eq!(t.next_due_ms(), 1500);
    }

    #[test]
    fn skips_missed_periods() {
        let mut t = RepeatingTask::new(100, 0);
        assert!(t.poll(1050));
        assert_eq!(t.next_due_ms(), 1100);
        assert!(!t.poll(1099));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut t = RepeatingTask::new(0, 10);
        assert_eq!(t.interval_ms(), 1);
        assert!(t.poll(11));
        assert!(!t.poll(11));
    }
}
