use crate::engine::RemainingTime;

/// Cooperative time-budget check. Every function that expands tree nodes
/// polls `expired` before touching children; a hit unwinds the whole call
/// chain as `None` and only the top-level driver may translate that into a
/// result.
pub struct Deadline<'a> {
    remaining_time: RemainingTime<'a>,
    /// Minimum slack (ms) needed to unwind the call stack and return.
    threshold_ms: f64,
}

impl<'a> Deadline<'a> {
    #[must_use]
    pub fn new(remaining_time: RemainingTime<'a>, threshold_ms: f64) -> Self {
        Self {
            remaining_time,
            threshold_ms,
        }
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        (self.remaining_time)() < self.threshold_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_expired_below_threshold() {
        let remaining = || 5.0;
        let deadline = Deadline::new(&remaining, 10.0);
        assert!(deadline.expired());
    }

    #[test]
    fn test_not_expired_above_threshold() {
        let remaining = || 150.0;
        let deadline = Deadline::new(&remaining, 10.0);
        assert!(!deadline.expired());
    }

    #[test]
    fn test_expires_as_budget_drains() {
        let budget = Cell::new(30.0);
        let remaining = || {
            let left = budget.get();
            budget.set(left - 12.0);
            left
        };
        let deadline = Deadline::new(&remaining, 10.0);
        assert!(!deadline.expired()); // 30 ms
        assert!(!deadline.expired()); // 18 ms
        assert!(deadline.expired()); // 6 ms
    }
}
