//! Store named Git identities and switch the global Git user between them.
//!
//! Profiles live in a JSON file (`~/.git-user-manager/profiles.json` by default)
//! mapping a profile name to `{ "name", "email" }`. Switching writes the profile
//! into `git config --global user.name` / `user.email`; listing marks the
//! profile that matches the live identity.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod manager;
pub mod menu;
pub mod profile;
pub mod storage;
pub mod validation;

use clap::CommandFactory;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::AppResult,
};

/// Runs the parsed command line
pub fn run(cli: Cli) -> AppResult<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config: AppConfig = AppConfig::from_cli(&cli)?;
    let manager = config.build_manager();

    match command {
        Commands::Add {
            profile_name,
            name,
            email,
        } => commands::add_profile(&manager, profile_name, name, email),
        Commands::Remove { profile_name } => commands::remove_profile(&manager, profile_name),
        Commands::List => {
            commands::list_profiles(&manager);
            Ok(())
        }
        Commands::Switch { profile_name } => commands::switch_profile(&manager, profile_name),
        Commands::Current => {
            commands::show_current_user(&manager);
            Ok(())
        }
        Commands::Menu => menu::run_menu(&manager),
    }
}
