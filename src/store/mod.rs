//! Append-only CSV event log.
//!
//! The store knows nothing about event kinds: it writes rows, and reads them
//! back as raw strings. Decoding and aggregation live in `core`.

mod reader;

pub use reader::RecordIter;

use crate::errors::AppResult;
use crate::models::event::{EventRecord, HEADERS};
use csv::WriterBuilder;
use parking_lot::{Mutex, MutexGuard};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub struct EventStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl EventStore {
    /// Open the log at `path`, creating it with the header when missing.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        Self::initialize(&path)?;
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Write the header to a new log. An existing file is left as is.
    pub fn initialize(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        let mut wtr = WriterBuilder::new().from_writer(file);
        wtr.write_record(HEADERS)?;
        wtr.flush()?;

        tracing::info!(path = %path.display(), "Event log created");
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row at the end of the log.
    pub fn append(&self, record: &EventRecord) -> AppResult<()> {
        let _guard = self.write_lock.lock();

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(record.to_row())?;
        wtr.flush()?;

        tracing::debug!(
            event = %record.event,
            user = %record.logging_user,
            timestamp = %record.timestamp_str(),
            "Event appended"
        );
        Ok(())
    }

    /// Append an event stamped with the current local time.
    pub fn append_now(
        &self,
        event: &str,
        data: Option<String>,
        logging_user: &str,
    ) -> AppResult<EventRecord> {
        let record = EventRecord::now(logging_user, event, data);
        self.append(&record)?;
        Ok(record)
    }

    /// Fresh read pass over the log, in file order, header excluded.
    pub fn read_all(&self) -> AppResult<RecordIter> {
        RecordIter::open(&self.path)
    }

    /// Hold the write guard, e.g. while a backup reads the file.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock()
    }
}
