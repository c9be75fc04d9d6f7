use crate::errors::AppResult;
use crate::models::event::RawRecord;
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::path::Path;

/// Lazy pass over the rows of a log file. Items are raw records; row-level
/// CSV errors are yielded as `Err` and the caller decides whether to skip.
pub struct RecordIter {
    inner: StringRecordsIntoIter<File>,
}

impl RecordIter {
    pub(crate) fn open(path: &Path) -> AppResult<Self> {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        Ok(Self {
            inner: rdr.into_records(),
        })
    }
}

impl Iterator for RecordIter {
    type Item = AppResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|res| res.map(|rec| RawRecord::from_csv(&rec)).map_err(Into::into))
    }
}
