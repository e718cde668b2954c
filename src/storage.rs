//! File-backed profile table.
//!
//! The table is loaded fresh for every operation and written back in full after
//! every mutation. There is no locking: two invocations racing on the same file
//! are last-write-wins.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    error::{AppError, AppResult},
    profile::{IdentityRecord, ProfileTable},
    validation::validate_profile_name,
};

/// Directory in the user's home holding the profiles file
const PROFILES_DIR: &str = ".git-user-manager";
/// Profiles file name
const PROFILES_FILE: &str = "profiles.json";

/// Gets the default path to the profiles file, `~/.git-user-manager/profiles.json`
pub fn default_profiles_path() -> AppResult<PathBuf> {
    let home_dir: PathBuf = dirs::home_dir()
        .ok_or_else(|| AppError::Config("failed to find the home directory".to_string()))?;
    Ok(home_dir.join(PROFILES_DIR).join(PROFILES_FILE))
}

/// Owner of the profiles file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Creates a store backed by `path`. Nothing is read or written until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the profile table
    ///
    /// A missing, unreadable or malformed file yields an empty table. Hand-edited
    /// files that no longer parse are reported at warn level rather than failing
    /// the command.
    pub fn load(&self) -> ProfileTable {
        let file_contents: String = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "profiles file does not exist yet");
                return ProfileTable::new();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read profiles file, treating as empty");
                return ProfileTable::new();
            }
        };

        if file_contents.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "profiles file is empty");
            return ProfileTable::new();
        }

        match serde_json::from_str::<ProfileTable>(&file_contents) {
            Ok(table) => {
                tracing::debug!(path = %self.path.display(), count = table.len(), "loaded profiles");
                table
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "profiles file is malformed, treating as empty");
                ProfileTable::new()
            }
        }
    }

    /// Saves the whole table, replacing the file atomically
    ///
    /// The JSON is written to a temporary file next to the target, synced, then
    /// renamed over it, so a crash mid-write leaves the previous file intact.
    ///
    /// # Arguments
    /// * `table` - Profiles to save
    pub fn save(&self, table: &ProfileTable) -> AppResult<()> {
        let json: String = serde_json::to_string_pretty(table)?;
        self.write_atomic(json.as_bytes())
            .map_err(|source| AppError::StorageWrite {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = table.len(), "saved profiles");
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let dir: &Path = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut temp: NamedTempFile = NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    /// Inserts or overwrites a profile, then saves
    ///
    /// # Arguments
    /// * `profile_name` - Unique, case-sensitive profile name
    /// * `record` - Identity to store under it
    pub fn add(&self, profile_name: &str, record: IdentityRecord) -> AppResult<()> {
        validate_profile_name(profile_name)?;

        let mut table: ProfileTable = self.load();
        if table.insert(profile_name.to_string(), record).is_some() {
            tracing::info!(profile = profile_name, "overwriting existing profile");
        }
        self.save(&table)
    }

    /// Removes a profile if present, then saves
    ///
    /// Returns `false` when no profile has that name; the file is left untouched.
    pub fn remove(&self, profile_name: &str) -> AppResult<bool> {
        let mut table: ProfileTable = self.load();
        if table.shift_remove(profile_name).is_none() {
            return Ok(false);
        }
        self.save(&table)?;
        Ok(true)
    }

    /// Lists all stored profiles in insertion order
    pub fn list(&self) -> ProfileTable {
        self.load()
    }
}
