use crate::{
    error::{AppError, AppResult},
    git::{IdentityBridge, IdentityConfig},
    profile::{IdentityRecord, ProfileListing, ProfileTable},
    storage::ProfileStore,
};

/// Ties the profile store to the live Git identity
#[derive(Debug, Clone)]
pub struct ProfileManager<C> {
    store: ProfileStore,
    bridge: IdentityBridge<C>,
}

impl<C: IdentityConfig> ProfileManager<C> {
    pub fn new(store: ProfileStore, bridge: IdentityBridge<C>) -> Self {
        Self { store, bridge }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Makes a stored profile the live Git identity
    ///
    /// Returns the applied record. An unknown name fails with
    /// [`AppError::ProfileNotFound`] before Git is touched.
    pub fn switch_profile(&self, profile_name: &str) -> AppResult<IdentityRecord> {
        let mut table: ProfileTable = self.store.load();
        let record: IdentityRecord = table
            .swap_remove(profile_name)
            .ok_or_else(|| AppError::ProfileNotFound(profile_name.to_string()))?;

        self.bridge
            .write_current(&record.display_name, &record.email)?;
        tracing::info!(profile = profile_name, "switched git identity");
        Ok(record)
    }

    /// Lists stored profiles, marking those equal to the live identity
    ///
    /// Any number of profiles may be active, including none.
    pub fn describe_profiles(&self) -> Vec<ProfileListing> {
        let table: ProfileTable = self.store.list();
        let live: Option<IdentityRecord> = self.bridge.read_current();

        table
            .into_iter()
            .map(|(profile_name, record)| {
                let active: bool = live.as_ref().is_some_and(|live| record.matches(live));
                ProfileListing {
                    profile_name,
                    record,
                    active,
                }
            })
            .collect()
    }

    /// Current Git identity, if both fields are set
    pub fn current_identity(&self) -> Option<IdentityRecord> {
        self.bridge.read_current()
    }
}
