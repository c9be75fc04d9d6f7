use crate::archive::ArchiveConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod allow_list;

pub use allow_list::AllowList;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_user")]
    pub default_user: String,
    #[serde(default = "default_users")]
    pub users: AllowList,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<ArchiveConfig>,
}

fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}
fn default_user() -> String {
    "local".to_string()
}
fn default_users() -> AllowList {
    AllowList::new().with(default_user(), "me")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            default_user: default_user(),
            users: default_users(),
            log_level: default_log_level(),
            archive: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("babylog")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".babylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("babylog.conf")
    }

    /// Default location of the CSV log
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("babylog.csv")
    }

    /// Configured log path with `~` expanded
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Load configuration from `path`, or defaults when the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Resolve the user attributed to a new event: an explicit id must be in
    /// the allow-list, otherwise the default user is used.
    pub fn resolve_user(&self, id: Option<&str>) -> AppResult<String> {
        let id = id.unwrap_or(self.default_user.as_str());
        self.users
            .display_name(id)
            .map(str::to_string)
            .ok_or_else(|| AppError::Unauthorized(id.to_string()))
    }
}
