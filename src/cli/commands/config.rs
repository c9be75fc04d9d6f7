use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("# {}", cfg_path.display());
            println!("{}", ConfigLogic::render(cfg_path)?);
        }

        if *edit_config {
            ConfigLogic::edit(cfg_path, editor.as_deref())?;
            success(format!("Configuration saved: {}", cfg_path.display()));
        }
    }

    Ok(())
}
