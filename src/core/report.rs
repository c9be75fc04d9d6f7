//! Plain-text blocks for the derived views.

use crate::core::aggregate::for_each_row;
use crate::core::diagnostics::{DiagnosticsSink, Severity};
use crate::errors::AppResult;
use crate::models::event::parse_timestamp;
use crate::models::views::{DailyCounts, LastOccurrences};
use crate::store::EventStore;
use crate::utils::formatting::pad_right;
use crate::utils::mins2readable;
use crate::utils::time::minutes_since;
use chrono::NaiveDateTime;

const KIND_W: usize = 15;
const USER_W: usize = 5;
const COUNT_W: usize = 11;

/// One rendered line: ` - <kind (data):> <user> Nh Mm ago (HH:MM)`, with the
/// first two columns padded to fixed widths.
///
/// `now` is `Some` for the elapsed-time variant; `None` renders only the
/// clock time. Fails when `timestamp` does not parse.
pub fn make_line(
    event: &str,
    timestamp: &str,
    data: &str,
    logging_user: &str,
    now: Option<NaiveDateTime>,
) -> AppResult<String> {
    let ts = parse_timestamp(timestamp)?;
    let hhmm = ts.format("%H:%M");

    let time_string = match now {
        Some(now) => format!("{} ago ({})", mins2readable(minutes_since(ts, now)), hhmm),
        None => format!("({})", hhmm),
    };

    let data_entry = if data.is_empty() {
        format!("{event}:")
    } else {
        format!("{event} ({data}):")
    };

    Ok(format!(
        " - {} {} {}",
        pad_right(&data_entry, KIND_W),
        pad_right(logging_user, USER_W),
        time_string
    ))
}

pub fn format_last_occurrences(last: &LastOccurrences, now: NaiveDateTime) -> String {
    let lines: Vec<String> = last
        .iter()
        .filter_map(|(event, occ)| {
            make_line(
                event,
                &occ.timestamp_str(),
                &occ.data,
                &occ.logging_user,
                Some(now),
            )
            .ok()
        })
        .collect();

    format!("Last occurrences:\n\n{}\n", lines.join("\n"))
}

pub fn format_daily_counts(counts: &DailyCounts) -> String {
    let lines: Vec<String> = counts
        .iter()
        .map(|(event, n)| format!(" - {} {}", pad_right(&format!("{event}:"), COUNT_W), n))
        .collect();

    format!("Daily counts:\n\n{}\n", lines.join("\n"))
}

/// Every row in file order, without elapsed time. Rows whose timestamp does
/// not parse are reported and left out.
pub fn format_all_rows(store: &EventStore, sink: &dyn DiagnosticsSink) -> AppResult<String> {
    let mut lines = Vec::new();

    for_each_row(store, sink, |row| {
        match make_line(&row.event, &row.timestamp, &row.data, &row.logging_user, None) {
            Ok(line) => lines.push(line),
            Err(e) => sink.report(&format!("Error in row: {row:?} - {e}"), Severity::Error),
        }
    })?;

    Ok(format!("All entries:\n\n{}\n", lines.join("\n")))
}
