//! # CLI Layer
//!
//! This module is **one possible UI client** for the gradebook library.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about stdin, stdout and stderr
//! - Sets up logging and terminal colors
//! - Handles argument parsing
//! - Formats records for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap argument definitions and their mapping to `RosterConfig`
//! - `menu.rs`: the interactive menu state machine
//! - `render.rs`: record, listing and message formatting

mod menu;
mod render;
mod setup;

use clap::Parser;
use gradebook::api::RosterApi;
use gradebook::config::RosterConfig;
use gradebook::error::Result;
use gradebook::prompt::Prompter;
use gradebook::store::memory::InMemoryStore;
use menu::Menu;
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config, cli.verbose > 0);

    if !config.color {
        colored::control::set_override(false);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter =
        Prompter::new(stdin.lock(), stdout.lock()).with_max_attempts(config.max_attempts);

    log::debug!("starting with {:?}", config);
    let mut menu = Menu::new(RosterApi::new(InMemoryStore::new()), prompter);
    menu.run()
}

/// `RUST_LOG` applies unless a `-v` flag picked the level explicitly.
fn init_logging(config: &RosterConfig, explicit: bool) {
    let mut builder = if explicit {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.log_level);
        builder
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config.log_level.as_str()),
        )
    };
    builder.format_timestamp(None).target(env_logger::Target::Stderr).init();
}
