use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A UTC timestamp with millisecond precision.
///
/// All timestamps are persisted as unix timestamps in **milli**seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        Self(secs * 1_000)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn as_secs(self) -> i64 {
        self.0 / 1_000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .expect("timestamp in range")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::from(*self);
        match dt.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
