//! Time abstraction traits for platform-agnostic timing.
//!
//! The controller only needs a monotonic clock to derive the rainbow phase.
//! `core::time::Duration` implements [`TimeDuration`] out of the box; with the
//! `std` feature, `std::time::Instant` and [`SystemClock`] cover host builds.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Elapsed time as reported by a [`TimeInstant`].
pub trait TimeDuration: Copy {
    /// Whole milliseconds, saturating at `u64::MAX`.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for core::time::Duration {
    fn as_millis(&self) -> u64 {
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }
}

#[cfg(feature = "std")]
impl TimeInstant for std::time::Instant {
    type Duration = core::time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.saturating_duration_since(earlier)
    }
}

/// Monotonic wall clock backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource<std::time::Instant> for SystemClock {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn core_duration_reports_whole_millis() {
        assert_eq!(TimeDuration::as_millis(&Duration::from_micros(62_900)), 62);
        assert_eq!(TimeDuration::as_millis(&Duration::ZERO), 0);
    }

    #[test]
    fn core_duration_saturates_on_huge_values() {
        assert_eq!(TimeDuration::as_millis(&Duration::MAX), u64::MAX);
    }
}
