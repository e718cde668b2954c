use std::{
    ffi::OsString,
    fmt,
    path::PathBuf,
    process::{Command, Output},
};

use crate::{
    error::{AppError, AppResult},
    profile::IdentityRecord,
};

/// Identity field in Git's configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
}

impl IdentityField {
    /// Git config key for the field
    pub fn key(self) -> &'static str {
        match self {
            IdentityField::Name => "user.name",
            IdentityField::Email => "user.email",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key-value identity configuration of an external tool
pub trait IdentityConfig {
    /// Reads a field. `Ok(None)` when the field is not set.
    fn get_field(&self, field: IdentityField) -> AppResult<Option<String>>;
    /// Writes a field
    fn set_field(&self, field: IdentityField, value: &str) -> AppResult<()>;
}

/// Which Git configuration file to operate on
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigScope {
    /// `git config --global`
    #[default]
    Global,
    /// `git config --file <path>`
    File(PathBuf),
}

impl ConfigScope {
    fn args(&self) -> Vec<OsString> {
        match self {
            ConfigScope::Global => vec!["--global".into()],
            ConfigScope::File(path) => vec!["--file".into(), path.clone().into_os_string()],
        }
    }
}

/// Runs `git config` directly, without a shell, so values reach Git verbatim
#[derive(Debug, Clone, Default)]
pub struct GitConfig {
    scope: ConfigScope,
}

impl GitConfig {
    pub fn new(scope: ConfigScope) -> Self {
        Self { scope }
    }

    fn run(&self, args: &[&str]) -> AppResult<Output> {
        let git_command_output: Output = Command::new("git")
            .arg("config")
            .args(self.scope.args())
            .args(args)
            .output()?;
        Ok(git_command_output)
    }
}

impl IdentityConfig for GitConfig {
    /// Executes Git config get command
    fn get_field(&self, field: IdentityField) -> AppResult<Option<String>> {
        let git_command_output: Output = self.run(&["--get", field.key()])?;

        if !git_command_output.status.success() {
            tracing::debug!(
                key = field.key(),
                code = ?git_command_output.status.code(),
                stderr = %String::from_utf8_lossy(&git_command_output.stderr).trim(),
                "git config --get returned no value"
            );
            return Ok(None);
        }

        let value: String = String::from_utf8(git_command_output.stdout)?;
        Ok(Some(strip_line_ending(value)))
    }

    /// Executes a Git config set command
    fn set_field(&self, field: IdentityField, value: &str) -> AppResult<()> {
        let git_command_output: Output = self
            .run(&[field.key(), value])
            .map_err(|err| AppError::GitCommand(format!("failed to run git: {err}")))?;

        if !git_command_output.status.success() {
            return Err(AppError::GitCommand(
                String::from_utf8_lossy(&git_command_output.stderr)
                    .trim()
                    .to_string(),
            ));
        }

        tracing::debug!(key = field.key(), "git config updated");
        Ok(())
    }
}

/// Removes only the trailing newline Git appends, keeping the value otherwise intact
fn strip_line_ending(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

/// Reads and writes the live Git user identity
#[derive(Debug, Clone, Default)]
pub struct IdentityBridge<C> {
    config: C,
}

impl<C: IdentityConfig> IdentityBridge<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Reads the current identity
    ///
    /// Returns `None` unless both user.name and user.email are set. Empty values
    /// are returned as-is. A fresh machine with no identity is a normal state,
    /// not an error.
    pub fn read_current(&self) -> Option<IdentityRecord> {
        let display_name: String = self.read_field(IdentityField::Name)?;
        let email: String = self.read_field(IdentityField::Email)?;
        Some(IdentityRecord { display_name, email })
    }

    fn read_field(&self, field: IdentityField) -> Option<String> {
        match self.config.get_field(field) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key = field.key(), error = %err, "failed to read git identity");
                None
            }
        }
    }

    /// Writes user.name then user.email
    ///
    /// There is no rollback. If the name is written and the email fails the error
    /// is [`AppError::PartialSwitch`], so callers never report a full switch.
    ///
    /// # Arguments
    /// * `display_name` - Value for user.name
    /// * `email` - Value for user.email
    pub fn write_current(&self, display_name: &str, email: &str) -> AppResult<()> {
        self.config.set_field(IdentityField::Name, display_name)?;

        if let Err(err) = self.config.set_field(IdentityField::Email, email) {
            tracing::warn!(error = %err, "user.email write failed after user.name was updated");
            return Err(AppError::PartialSwitch(err.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    #[test]
    fn strips_only_the_line_ending() {
        assert_eq!(strip_line_ending("Work Name\n".to_string()), "Work Name");
        assert_eq!(strip_line_ending("Work Name\r\n".to_string()), "Work Name");
        assert_eq!(strip_line_ending(" padded \n".to_string()), " padded ");
        assert_eq!(strip_line_ending("no newline".to_string()), "no newline");
    }

    #[test]
    fn file_scope_passes_path_argument() {
        let scope = ConfigScope::File(PathBuf::from("/tmp/x.gitconfig"));
        assert_eq!(
            scope.args(),
            vec![OsString::from("--file"), OsString::from("/tmp/x.gitconfig")]
        );
        assert_eq!(ConfigScope::Global.args(), vec![OsString::from("--global")]);
    }

    #[test]
    fn unset_identity_reads_as_none() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let bridge = IdentityBridge::new(GitConfig::new(ConfigScope::File(
            dir.path().join("gitconfig"),
        )));
        assert_eq!(bridge.read_current(), None);
    }

    #[test]
    fn empty_values_read_back_as_set() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let bridge = IdentityBridge::new(GitConfig::new(ConfigScope::File(
            dir.path().join("gitconfig"),
        )));

        bridge.write_current("", "").unwrap();

        assert_eq!(bridge.read_current(), Some(IdentityRecord::new("", "")));
    }

    #[test]
    fn quotes_and_shell_characters_round_trip_through_git() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let bridge = IdentityBridge::new(GitConfig::new(ConfigScope::File(
            dir.path().join("gitconfig"),
        )));

        let name = r#"Jane "JJ" O'Doe; echo $HOME `id` \ end"#;
        let email = "jane doe@example.com";
        bridge.write_current(name, email).unwrap();

        assert_eq!(bridge.read_current(), Some(IdentityRecord::new(name, email)));
    }
}
