use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EventKind;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Comment { text, user } = cmd {
        let user = cfg.resolve_user(user.as_deref())?;
        let store = open_store(cfg)?;
        store.append_now(EventKind::Comment.as_str(), Some(text.join(" ")), &user)?;
        success("Comment logged.");
    }

    Ok(())
}
