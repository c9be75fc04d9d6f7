use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test` or when it exists)
///  - the event log with its header (existing logs are left untouched)
pub fn handle(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    if !cli.test && !cfg_path.exists() {
        cfg.save_to(cfg_path)?;
        success(format!("Config file: {}", cfg_path.display()));
    }

    let log_path = cfg.log_path();
    if EventStore::initialize(&log_path)? {
        success(format!("Event log created at {}", log_path.display()));
    } else {
        info(format!("Event log already present at {}", log_path.display()));
    }

    Ok(())
}
