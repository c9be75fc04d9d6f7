use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, USAGE};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;

/// Log a past event from an `activity[/data]-HH:MM` string.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry, user } = cmd {
        let input = entry.join(" ");
        let user = cfg.resolve_user(user.as_deref())?;

        // parse before touching the log, so bad input leaves no trace
        let req = AddLogic::parse(&input).map_err(|e| match e {
            AppError::InvalidEventString(msg) => {
                AppError::InvalidEventString(format!("{msg}\n{USAGE}"))
            }
            other => other,
        })?;

        let store = open_store(cfg)?;
        let record = AddLogic::to_record(&req, &user, Local::now().naive_local());
        store.append(&record)?;

        success(format!(
            "Logged: {} at {}",
            req.activity,
            record.timestamp.format("%H:%M %Y-%m-%d")
        ));
    }

    Ok(())
}
