use time::{Date, OffsetDateTime};

/// Source of the current calendar date.
///
/// Daily identifier derivation is the one operation in this crate with a
/// non-pure input; putting it behind a trait lets tests pin the date
/// without touching process state.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> Date;
}

/// Wall-clock dates in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, which
/// `time` refuses to do in some multithreaded environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// A fixed `Date` can stand in as a clock, which keeps tests deterministic.
impl Clock for Date {
    fn today(&self) -> Date {
        *self
    }
}
