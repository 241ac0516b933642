use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Handlers read it once per request and pass the instant down to the
/// visibility rules.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
