use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{BackupManager, RemoteStatus};
use crate::core::diagnostics::TracingSink;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::sync::Arc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { no_remote } = cmd {
        // build the archive first: a broken archive config fails before any copy
        let archive = match (&cfg.archive, *no_remote) {
            (Some(ac), false) => Some(ac.build()?),
            _ => None,
        };

        let store = Arc::new(open_store(cfg)?);
        let manager = BackupManager::new(store, archive, Arc::new(TracingSink));
        let outcome = manager.backup()?;

        success(format!("Backup created: {}", outcome.local.display()));
        match outcome.remote {
            RemoteStatus::Skipped => info("No remote archive configured."),
            RemoteStatus::Uploaded(id) => success(format!("Uploaded: {}", id)),
            RemoteStatus::Failed(reason) => {
                warning(format!("Remote upload failed, local copy kept: {}", reason))
            }
        }
    }

    Ok(())
}
