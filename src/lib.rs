//! rtempo library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! stages (loader, core, export) for reuse and testing.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod loader;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, normalize_args};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.columns {
        cli::commands::columns::handle(cli)
    } else {
        cli::commands::report::handle(cli, cfg)
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI (legacy `-pd` rewritten first)
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // 2. load config once, optionally from an explicit path
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // 3. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
