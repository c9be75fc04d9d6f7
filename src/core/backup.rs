use crate::archive::RemoteArchive;
use crate::core::diagnostics::{DiagnosticsSink, Severity};
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::utils::path::backup_dir_for;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// What happened to the remote copy of a backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    /// No archive configured.
    Skipped,
    Uploaded(String),
    /// The local copy exists regardless.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct BackupOutcome {
    pub local: PathBuf,
    pub remote: RemoteStatus,
}

pub struct BackupManager {
    store: Arc<EventStore>,
    archive: Option<Box<dyn RemoteArchive>>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl BackupManager {
    pub fn new(
        store: Arc<EventStore>,
        archive: Option<Box<dyn RemoteArchive>>,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            store,
            archive,
            sink,
        }
    }

    pub fn backup_dir(&self) -> PathBuf {
        backup_dir_for(self.store.path())
    }

    pub fn backup(&self) -> AppResult<BackupOutcome> {
        self.backup_at(Local::now().naive_local())
    }

    /// Copy the live log to `backups/<stem>_backup_<stamp><suffix>` and
    /// forward the copy to the archive, if any. The live file is never
    /// modified.
    pub fn backup_at(&self, now: NaiveDateTime) -> AppResult<BackupOutcome> {
        let src = self.store.path();

        // 1️⃣ Check log exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Event log not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure backup folder exists
        let dir = self.backup_dir();
        fs::create_dir_all(&dir)?;

        // 3️⃣ Read under the write guard so no half-written row is copied
        let content = {
            let _guard = self.store.lock();
            fs::read(src)?
        };

        // 4️⃣ Write the copy, never over an existing file
        let dest = write_new(&dir, src, now, &content)?;
        tracing::info!(path = %dest.display(), "Backup created");

        // 5️⃣ Optional remote copy
        let remote = match &self.archive {
            None => RemoteStatus::Skipped,
            Some(archive) => match archive.upload(&dest) {
                Ok(id) => {
                    tracing::info!(id = %id, archive = %archive.describe(), "Backup uploaded");
                    RemoteStatus::Uploaded(id)
                }
                Err(e) => {
                    self.sink.report(
                        &format!("Upload of {} failed: {}", dest.display(), e),
                        Severity::Error,
                    );
                    RemoteStatus::Failed(e.to_string())
                }
            },
        };

        Ok(BackupOutcome {
            local: dest,
            remote,
        })
    }
}

/// `<stem>_backup_<stamp><suffix>`, with `_<n>` after the stamp when a backup
/// from the same second is already there.
pub fn backup_file_name(src: &Path, now: NaiveDateTime, n: u32) -> String {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let suffix = src
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let stamp = now.format(STAMP_FORMAT);

    if n == 0 {
        format!("{stem}_backup_{stamp}{suffix}")
    } else {
        format!("{stem}_backup_{stamp}_{n}{suffix}")
    }
}

fn write_new(dir: &Path, src: &Path, now: NaiveDateTime, content: &[u8]) -> AppResult<PathBuf> {
    let mut n = 0;
    loop {
        let dest = dir.join(backup_file_name(src, now, n));
        match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(mut f) => {
                f.write_all(content)?;
                f.flush()?;
                return Ok(dest);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
