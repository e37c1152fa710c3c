// CLI definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "headsurf")]
#[command(author, version, about = "Head-motion to key-press controller")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/headsurf/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read landmark samples and press keys (default)
    Run(RunArgs),

    /// List emulator profiles and their keys
    #[command(visible_alias = "ls")]
    Profiles,

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Newline-delimited JSON samples (default: stdin, or "-")
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Emulator profile (overrides config)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Mirror x coordinates (selfie-view camera)
    #[arg(long)]
    pub mirror: bool,

    /// Only log key presses; never open /dev/uinput
    #[arg(long)]
    pub simulate: bool,

    /// No terminal controls (calibrate with --auto-calibrate)
    #[arg(long)]
    pub headless: bool,

    /// Calibrate on the first detected sample
    #[arg(long)]
    pub auto_calibrate: bool,
}

impl Commands {
    /// Whether this command puts the terminal into raw mode
    pub fn uses_raw_terminal(&self) -> bool {
        matches!(self, Commands::Run(args) if !args.headless)
    }
}
