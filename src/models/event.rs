use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

/// Persisted timestamp layout: `HH:MM:SS YYYY-MM-DD`, local wall clock.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %Y-%m-%d";

/// Canonical CSV header of the log file.
pub const HEADERS: [&str; 4] = ["timestamp", "logging_user", "event", "data"];

/// One logged occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime, // ⇔ column `timestamp` ("HH:MM:SS YYYY-MM-DD")
    pub logging_user: String,     // ⇔ column `logging_user`
    pub event: String,            // ⇔ column `event` (kind-agnostic)
    pub data: Option<String>,     // ⇔ column `data` (empty when absent)
}

impl EventRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        logging_user: impl Into<String>,
        event: impl Into<String>,
        data: Option<String>,
    ) -> Self {
        Self {
            // sub-second precision is never persisted
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            logging_user: logging_user.into(),
            event: event.into(),
            data: data.filter(|d| !d.is_empty()),
        }
    }

    /// Record stamped with the current local time.
    pub fn now(
        logging_user: impl Into<String>,
        event: impl Into<String>,
        data: Option<String>,
    ) -> Self {
        Self::new(Local::now().naive_local(), logging_user, event, data)
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Row as written to the CSV file, in header order.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.timestamp_str(),
            self.logging_user.clone(),
            self.event.clone(),
            self.data.clone().unwrap_or_default(),
        ]
    }
}

/// A row as the store reads it back: raw strings, nothing decoded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub timestamp: String,
    pub logging_user: String,
    pub event: String,
    pub data: String,
}

impl RawRecord {
    pub fn from_csv(rec: &csv::StringRecord) -> Self {
        let field = |i: usize| rec.get(i).unwrap_or_default().to_string();
        Self {
            timestamp: field(0),
            logging_user: field(1),
            event: field(2),
            data: field(3),
        }
    }

    pub fn parse_timestamp(&self) -> AppResult<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Decode into a typed record; fails only on the timestamp.
    pub fn decode(&self) -> AppResult<EventRecord> {
        let ts = self.parse_timestamp()?;
        Ok(EventRecord {
            timestamp: ts,
            logging_user: self.logging_user.clone(),
            event: self.event.clone(),
            data: Some(self.data.clone()).filter(|d| !d.is_empty()),
        })
    }
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| AppError::MalformedRecord(format!("timestamp '{}': {}", s, e)))
}
