use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(
    name = "git-user-manager",
    version,
    about = "Store named Git identities and switch the global Git user between them",
    after_help = "Examples:\n  git-user-manager add work \"Work Name\" work@company.com\n  git-user-manager add personal \"Personal Name\" personal@email.com\n  git-user-manager switch work\n  git-user-manager list\n  git-user-manager current"
)]
pub struct Cli {
    /// Profiles file [default: ~/.git-user-manager/profiles.json]
    #[arg(long, global = true, env = "GIT_USER_MANAGER_PROFILES", value_name = "PATH")]
    pub profiles_file: Option<PathBuf>,

    /// Operate on this git config file instead of the global one
    #[arg(long, global = true, env = "GIT_USER_MANAGER_GIT_CONFIG", value_name = "PATH")]
    pub git_config_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adds a profile, overwriting any profile with the same name
    Add {
        /// Profile name
        profile_name: String,
        /// Git username (user.name)
        name: String,
        /// Git email (user.email)
        email: String,
    },
    /// Removes a profile
    Remove {
        /// Profile to remove
        profile_name: String,
    },
    /// Lists saved profiles, marking the active one
    List,
    /// Switches the global Git user to a saved profile
    Switch {
        /// Profile to switch to
        profile_name: String,
    },
    /// Displays current Git user
    Current,
    /// Interactive menu
    Menu,
}
