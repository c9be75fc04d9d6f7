//! Remote archive collaborators used by the backup.
//!
//! The backup only needs `upload(path)`; how a file reaches off-site storage
//! is up to the implementation. Two ship with the crate: a mirror folder
//! (typically a directory synced by a desktop drive client) and an external
//! command such as `rclone copy {file} remote:babylog`.

mod command;
mod folder;

pub use command::CommandArchive;
pub use folder::FolderArchive;

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait RemoteArchive: Send + Sync {
    /// Store `path` remotely and return an identifier for the stored copy.
    fn upload(&self, path: &Path) -> AppResult<String>;

    /// Short human description, used in messages.
    fn describe(&self) -> String;
}

/// `archive:` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArchiveConfig {
    Folder {
        path: String,
    },
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl ArchiveConfig {
    /// Build the archive, failing fast on settings that can never work.
    pub fn build(&self) -> AppResult<Box<dyn RemoteArchive>> {
        match self {
            ArchiveConfig::Folder { path } => {
                let dir = crate::utils::path::expand_tilde(path);
                if path.trim().is_empty() {
                    return Err(AppError::Config("archive folder path is empty".into()));
                }
                if !dir.is_dir() {
                    return Err(AppError::Config(format!(
                        "archive folder '{}' does not exist",
                        dir.display()
                    )));
                }
                Ok(Box::new(FolderArchive::new(dir)))
            }
            ArchiveConfig::Command { program, args } => {
                if program.trim().is_empty() {
                    return Err(AppError::Config("archive command is empty".into()));
                }
                Ok(Box::new(CommandArchive::new(program.clone(), args.clone())))
            }
        }
    }
}
