//! `activity[/data]-HH:MM` parsing for backfilled events.

use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::store::EventStore;
use crate::utils::time::{backdate, parse_hour_minute};
use chrono::{NaiveDateTime, NaiveTime};

/// Separator between event kind and payload, e.g. `feed/sx`.
pub const DATA_SEP: char = '/';

pub const USAGE: &str = "Please insert the activity and the time in the following format: activity/data-hour:min";

/// A parsed add string, not yet placed on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub activity: String,
    pub event: String,
    pub data: Option<String>,
    pub time: NaiveTime,
}

/// Split `event/data` into its two halves.
pub fn split_activity(activity: &str) -> (String, Option<String>) {
    match activity.split_once(DATA_SEP) {
        Some((event, data)) => {
            // anything after a second separator is dropped
            let data = data.split(DATA_SEP).next().unwrap_or_default().trim();
            (
                event.trim().to_string(),
                Some(data.to_string()).filter(|d| !d.is_empty()),
            )
        }
        None => (activity.trim().to_string(), None),
    }
}

pub struct AddLogic;

impl AddLogic {
    /// Parse `activity[/data]-H:MM` (or with a space instead of `-`, and `.`
    /// instead of `:`).
    pub fn parse(input: &str) -> AppResult<AddRequest> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::InvalidEventString("empty string".into()));
        }

        let sep = if input.contains('-') {
            '-'
        } else if input.contains(' ') {
            ' '
        } else {
            return Err(AppError::InvalidEventString(format!(
                "'{}' has no '-' or space between activity and time",
                input
            )));
        };

        let parts: Vec<&str> = input.split(sep).map(str::trim).collect();
        let [activity, time] = parts.as_slice() else {
            return Err(AppError::InvalidEventString(format!(
                "'{}' should have exactly one '{}'",
                input, sep
            )));
        };

        let (event, data) = split_activity(activity);
        if event.is_empty() {
            return Err(AppError::InvalidEventString(format!(
                "'{}' has no activity",
                input
            )));
        }

        let time = parse_hour_minute(time)
            .map_err(|e| AppError::InvalidEventString(format!("'{}': {}", input, e)))?;

        Ok(AddRequest {
            activity: activity.to_string(),
            event,
            data,
            time,
        })
    }

    /// Parse and append. Times later than `now` are moved to the day before.
    pub fn apply(
        store: &EventStore,
        input: &str,
        logging_user: &str,
        now: NaiveDateTime,
    ) -> AppResult<EventRecord> {
        let req = Self::parse(input)?;
        let record = Self::to_record(&req, logging_user, now);
        store.append(&record)?;
        Ok(record)
    }

    pub fn to_record(req: &AddRequest, logging_user: &str, now: NaiveDateTime) -> EventRecord {
        EventRecord::new(
            backdate(req.time, now),
            logging_user,
            req.event.clone(),
            req.data.clone(),
        )
    }
}
