use std::path::PathBuf;

use crate::{
    cli::Cli,
    error::AppResult,
    git::{ConfigScope, GitConfig, IdentityBridge},
    manager::ProfileManager,
    storage::{ProfileStore, default_profiles_path},
};

/// Resolved locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backing file for the profile table
    pub profiles_file: PathBuf,
    /// Git config file holding the live identity
    pub git_scope: ConfigScope,
}

impl AppConfig {
    /// Builds config from CLI flags, falling back to `~/.git-user-manager/profiles.json`
    /// and `git config --global`
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let profiles_file: PathBuf = match &cli.profiles_file {
            Some(path) => path.clone(),
            None => default_profiles_path()?,
        };
        let git_scope: ConfigScope = cli
            .git_config_file
            .clone()
            .map(ConfigScope::File)
            .unwrap_or_default();

        tracing::debug!(profiles_file = %profiles_file.display(), git_scope = ?git_scope, "resolved configuration");
        Ok(Self {
            profiles_file,
            git_scope,
        })
    }

    /// Wires the store and the git bridge together
    pub fn build_manager(&self) -> ProfileManager<GitConfig> {
        ProfileManager::new(
            ProfileStore::new(&self.profiles_file),
            IdentityBridge::new(GitConfig::new(self.git_scope.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn explicit_paths_override_defaults() {
        let cli = Cli::try_parse_from([
            "git-user-manager",
            "--profiles-file",
            "/tmp/p.json",
            "--git-config-file",
            "/tmp/gitconfig",
            "list",
        ])
        .unwrap();

        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.profiles_file, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.git_scope, ConfigScope::File(PathBuf::from("/tmp/gitconfig")));
        assert_eq!(config.build_manager().store().path(), PathBuf::from("/tmp/p.json"));
    }
}
