//! Views derived from a full scan of the log.

use crate::core::diagnostics::{DiagnosticsSink, Severity};
use crate::errors::AppResult;
use crate::models::event::RawRecord;
use crate::models::event_kind::EventKind;
use crate::models::views::{DailyCounts, LastOccurrence, LastOccurrences};
use crate::store::EventStore;
use chrono::{Local, NaiveDate};

pub struct AggregateLogic;

impl AggregateLogic {
    /// Latest record per event kind.
    ///
    /// Rows are taken in file order and a row replaces the current entry only
    /// when strictly later, so among equal timestamps the first one wins.
    pub fn last_occurrences(
        store: &EventStore,
        sink: &dyn DiagnosticsSink,
    ) -> AppResult<LastOccurrences> {
        let mut last = LastOccurrences::default();

        for_each_row(store, sink, |row| {
            let ts = match row.parse_timestamp() {
                Ok(ts) => ts,
                Err(e) => {
                    sink.report(
                        &format!("Skipping row when computing last occurrences: {row:?}: {e}"),
                        Severity::Error,
                    );
                    return;
                }
            };

            let replace = match last.get(&row.event) {
                None => true,
                Some(current) => (ts - current.timestamp).num_seconds() > 0,
            };

            if replace {
                last.insert(
                    &row.event,
                    LastOccurrence {
                        timestamp: ts,
                        data: row.data.clone(),
                        logging_user: row.logging_user.clone(),
                    },
                );
            }
        })?;

        Ok(last)
    }

    /// Per-kind counts of today's rows, comments excluded.
    pub fn daily_counts(store: &EventStore, sink: &dyn DiagnosticsSink) -> AppResult<DailyCounts> {
        Self::daily_counts_on(store, Local::now().date_naive(), sink)
    }

    /// Same as [`daily_counts`](Self::daily_counts) for an explicit day.
    ///
    /// The day is matched as a substring of the persisted timestamp field,
    /// so a row with a broken time but a readable date still counts.
    pub fn daily_counts_on(
        store: &EventStore,
        day: NaiveDate,
        sink: &dyn DiagnosticsSink,
    ) -> AppResult<DailyCounts> {
        let day_str = day.format("%Y-%m-%d").to_string();
        let mut counts = DailyCounts::default();

        for_each_row(store, sink, |row| {
            if !row.timestamp.contains(&day_str) {
                return;
            }
            if EventKind::excluded_from_counts(&row.event) {
                return;
            }

            match counts.get_mut(&row.event) {
                Some(n) => *n += 1,
                None => counts.insert(&row.event, 1),
            }
        })?;

        Ok(counts)
    }
}

/// Drive `f` over every decodable CSV row. Storage failures abort the scan;
/// anything row-level is reported and skipped.
pub(crate) fn for_each_row<F>(
    store: &EventStore,
    sink: &dyn DiagnosticsSink,
    mut f: F,
) -> AppResult<()>
where
    F: FnMut(&RawRecord),
{
    for item in store.read_all()? {
        match item {
            Ok(row) => f(&row),
            Err(e) if e.is_io_failure() => return Err(e),
            Err(e) => sink.report(&format!("Skipping unreadable row: {e}"), Severity::Error),
        }
    }
    Ok(())
}
