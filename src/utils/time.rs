//! Time utilities: parsing `HH:MM` / `HH.MM`, elapsed minutes, backdating.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a wall-clock time written as `H:MM` or `H.MM`.
pub fn parse_hour_minute(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    let sep = if t.contains(':') {
        ':'
    } else if t.contains('.') {
        '.'
    } else {
        return Err(AppError::InvalidTime(format!(
            "'{}' (expected hour:min or hour.min)",
            t
        )));
    };

    let parts: Vec<&str> = t.split(sep).map(str::trim).collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(AppError::InvalidTime(format!("'{}'", t)));
    };

    let h: u32 = hour
        .parse()
        .map_err(|_| AppError::InvalidTime(format!("bad hour '{}'", hour)))?;
    let m: u32 = minute
        .parse()
        .map_err(|_| AppError::InvalidTime(format!("bad minute '{}'", minute)))?;

    NaiveTime::from_hms_opt(h, m, 0)
        .ok_or_else(|| AppError::InvalidTime(format!("{:02}:{:02} is out of range", h, m)))
}

/// Whole minutes from `then` to `now`, floored, never negative.
pub fn minutes_since(then: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let secs = (now - then).num_seconds();
    if secs <= 0 { 0 } else { secs / 60 }
}

/// Place `time` on `today`, or on the day before when that would be later
/// than `now`. Uses calendar subtraction, so the 1st of a month rolls back
/// to the last day of the previous month.
pub fn backdate(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today: NaiveDate = now.date();
    let candidate = today.and_time(time);
    if candidate > now {
        today
            .checked_sub_days(Days::new(1))
            .map(|d| d.and_time(time))
            .unwrap_or(candidate)
    } else {
        candidate
    }
}
