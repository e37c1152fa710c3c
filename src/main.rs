//! headsurf - head-motion controller
//!
//! Main entry point.

use anyhow::Result;
use clap::Parser;
use headsurf::HeadsurfConfig;

// CLI definitions
mod cli;
use cli::{Cli, Commands, RunArgs};

// Command handlers
mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    headsurf::logging::init(&cli.log_level, command.uses_raw_terminal());

    let config_path = cli.config.unwrap_or_else(HeadsurfConfig::default_path);

    match command {
        Commands::Run(args) => commands::run(&config_path, args),
        Commands::Profiles => commands::profiles(&config_path),
        Commands::InitConfig { force } => commands::init_config(&config_path, force),
    }
}
