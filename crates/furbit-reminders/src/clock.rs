use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for the engine.
///
/// Injected instead of read from the host so both passes see one coherent
/// instant per invocation and tests can pin the calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date the due-window math runs against.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Host system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
