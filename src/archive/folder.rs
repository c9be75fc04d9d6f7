use super::RemoteArchive;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Copies each backup into a mirror directory.
#[derive(Debug, Clone)]
pub struct FolderArchive {
    dir: PathBuf,
}

impl FolderArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RemoteArchive for FolderArchive {
    fn upload(&self, path: &Path) -> AppResult<String> {
        let name = path
            .file_name()
            .ok_or_else(|| AppError::Archive(format!("not a file: {}", path.display())))?;
        let dest = self.dir.join(name);

        fs::copy(path, &dest).map_err(|e| {
            AppError::Archive(format!("copy to {} failed: {}", dest.display(), e))
        })?;

        Ok(dest.to_string_lossy().to_string())
    }

    fn describe(&self) -> String {
        format!("folder {}", self.dir.display())
    }
}
