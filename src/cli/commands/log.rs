use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EventKind;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { event, data, user } = cmd {
        let user = cfg.resolve_user(user.as_deref())?;
        if EventKind::from_str_opt(event).is_none() {
            let known: Vec<&str> = EventKind::ALL.iter().map(EventKind::as_str).collect();
            warning(format!(
                "'{}' is not a known event kind ({}), logging it anyway",
                event.trim(),
                known.join(", ")
            ));
        }

        let store = open_store(cfg)?;

        let record = store.append_now(event.trim(), data.clone(), &user)?;
        success(format!(
            "Logged: {}{} at {}",
            record.event,
            record
                .data
                .as_deref()
                .map(|d| format!(" ({d})"))
                .unwrap_or_default(),
            record.timestamp.format("%H:%M")
        ));
    }

    Ok(())
}
