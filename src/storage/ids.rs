//! Record identifier generation
//!
//! Ids are milliseconds since the Unix epoch, bumped past the previously
//! issued id when two requests land in the same millisecond. Time-ordered
//! like the stored data expects, unique within the process.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic id sequence seeded from the wall clock.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicI64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id: the current millisecond timestamp, or one past the
    /// last issued id if the clock has not advanced.
    pub fn next(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_in_a_burst() {
        let ids = IdSequence::new();
        let issued: HashSet<i64> = (0..1000).map(|_| ids.next()).collect();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = IdSequence::new();
        let mut previous = ids.next();
        for _ in 0..100 {
            let next = ids.next();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_ids_track_the_clock() {
        let ids = IdSequence::new();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;
        let id = ids.next();
        assert!(id >= now);
    }
}
