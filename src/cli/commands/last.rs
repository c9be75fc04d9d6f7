use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::AggregateLogic;
use crate::core::diagnostics::TracingSink;
use crate::core::report::format_last_occurrences;
use crate::errors::AppResult;
use crate::ui::messages;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Last { json } = cmd {
        let store = open_store(cfg)?;
        let last = AggregateLogic::last_occurrences(&store, &TracingSink)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&last)?);
        } else {
            messages::block(&format_last_occurrences(&last, Local::now().naive_local()));
        }
    }

    Ok(())
}
