use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::AggregateLogic;
use crate::core::diagnostics::TracingSink;
use crate::core::report::format_daily_counts;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Counts { json } = cmd {
        let store = open_store(cfg)?;
        let counts = AggregateLogic::daily_counts(&store, &TracingSink)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        } else {
            messages::block(&format_daily_counts(&counts));
        }
    }

    Ok(())
}
