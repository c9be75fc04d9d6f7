//! babylog library root.
//! Exposes the event store, the aggregation layer, the chat-style dispatcher
//! and the CLI front end.

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &std::path::Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg_path),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Comment { .. } => cli::commands::comment::handle(&cli.command, cfg),
        Commands::Last { .. } => cli::commands::last::handle(&cli.command, cfg),
        Commands::Counts { .. } => cli::commands::counts::handle(&cli.command, cfg),
        Commands::All => cli::commands::all::handle(cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, from --config or the standard location
    let cfg_path = cli.config.clone().map(PathBuf::from).unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&cfg_path)?;

    // 3️⃣ command-line override of the log file
    if let Some(custom) = &cli.log_file {
        cfg.log_file = custom.clone();
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg, &cfg_path)
}
