//! Wall-clock timestamps
//!
//! All entity timestamps are local wall-clock time at second granularity,
//! stored as `YYYY-MM-DD HH:MM:SS` with no timezone.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format used for every persisted timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A second-granularity local timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a datetime, dropping sub-second precision
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map(Self)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Local::now().naive_local())
    }
}

/// A settable clock for tests and reproducible runs
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<Timestamp>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Creates a clock from a `YYYY-MM-DD HH:MM:SS` string
    pub fn at(s: &str) -> Result<Self, chrono::ParseError> {
        s.parse().map(Self::new)
    }

    /// Moves the clock forward by the given number of seconds
    pub fn advance(&self, seconds: i64) {
        let next = self.now.get().0 + Duration::seconds(seconds);
        self.now.set(Timestamp(next));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_uses_fixed_format() {
        let ts: Timestamp = "2024-03-05 09:07:01".parse().unwrap();
        assert_eq!(ts.to_string(), "2024-03-05 09:07:01");
    }

    #[test]
    fn timestamp_serializes_as_string() {
        let ts: Timestamp = "2024-03-05 09:07:01".parse().unwrap();
        let json = serde_json::to_string(&ts).unwrap();

        assert_eq!(json, "\"2024-03-05 09:07:01\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn timestamp_rejects_other_formats() {
        assert!("2024-03-05T09:07:01Z".parse::<Timestamp>().is_err());
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!(serde_json::from_str::<Timestamp>("\"2024-03-05\"").is_err());
    }

    #[test]
    fn system_clock_has_second_granularity() {
        let now = SystemClock.now();
        assert_eq!(now.to_string().len(), 19);
        assert_eq!(now.to_string().parse::<Timestamp>().unwrap(), now);
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::at("2024-01-01 23:59:30").unwrap();
        assert_eq!(clock.now().to_string(), "2024-01-01 23:59:30");

        clock.advance(45);
        assert_eq!(clock.now().to_string(), "2024-01-02 00:00:15");
    }
}
