use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Raw file content, or the defaults rendered as YAML when the file has
    /// not been written yet.
    pub fn render(path: &Path) -> AppResult<String> {
        if path.exists() {
            return fs::read_to_string(path).map_err(|e| AppError::Config(e.to_string()));
        }
        serde_yaml::to_string(&Config::default()).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Open the file in an editor, writing the defaults first if needed.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save_to(path)?;
        }

        let ed = editor
            .map(str::to_string)
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }

        // Reject an edit that no longer parses.
        Config::load_from(path).map(|_| ())
    }
}
