use std::fmt;

use chrono::{DateTime, Utc};

/// Seconds since the Unix epoch, as stored in the backup
///
/// The raw integer is kept so every `i64` is accepted. Values chrono cannot represent
/// (Firefox writes microseconds, which land far outside its range) display as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub fn secs(self) -> i64 {
        self.0
    }

    /// UTC time, if chrono can represent it
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Formats with a chrono format string, falling back to the raw number
    pub fn format(self, fmt: &str) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format(fmt).to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt),
            None => write!(f, "{}", self.0),
        }
    }
}
