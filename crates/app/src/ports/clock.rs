//! Wall-clock port — lets scheduling logic run against a fixed instant in
//! tests.

use chrono::NaiveDateTime;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock, in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_a_recent_instant() {
        let before = chrono::Local::now().naive_local();
        let now = SystemClock.now();
        let after = chrono::Local::now().naive_local();
        assert!(now >= before);
        assert!(now <= after);
    }
}
