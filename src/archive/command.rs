use super::RemoteArchive;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

/// Placeholder replaced by the backup path in the configured arguments.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Hands each backup to an external uploader.
///
/// When no argument contains `{file}`, the path is appended as the last
/// argument. The uploader's trimmed stdout is used as the remote id, or the
/// file name when stdout is empty.
#[derive(Debug, Clone)]
pub struct CommandArchive {
    program: String,
    args: Vec<String>,
}

impl CommandArchive {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn build_args(&self, path: &Path) -> Vec<String> {
        let file = path.to_string_lossy();
        let mut out: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace(FILE_PLACEHOLDER, &file))
            .collect();
        if !self.args.iter().any(|a| a.contains(FILE_PLACEHOLDER)) {
            out.push(file.to_string());
        }
        out
    }
}

impl RemoteArchive for CommandArchive {
    fn upload(&self, path: &Path) -> AppResult<String> {
        let output = Command::new(&self.program)
            .args(self.build_args(path))
            .output()
            .map_err(|e| AppError::Archive(format!("cannot run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Archive(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if id.is_empty() {
            Ok(path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default())
        } else {
            Ok(id)
        }
    }

    fn describe(&self) -> String {
        format!("command {}", self.program)
    }
}
