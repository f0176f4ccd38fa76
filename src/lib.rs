//! rPunchCalc library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! calculation engine used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Quota { .. } => cli::commands::quota::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Bulk { .. } => cli::commands::bulk::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Reset => cli::commands::reset::handle(cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load();

    // 3️⃣ command-line overrides
    if let Some(custom_state) = &cli.state {
        cfg.state_file = custom_state.clone();
    }
    if let Some(clock) = cli.clock {
        cfg.clock_format = clock;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
