use super::open_store;
use crate::config::Config;
use crate::core::diagnostics::TracingSink;
use crate::core::report::format_all_rows;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    messages::block(&format_all_rows(&store, &TracingSink)?);
    Ok(())
}
