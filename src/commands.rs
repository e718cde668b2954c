use colored::Colorize;

use crate::{
    error::{AppError, AppResult},
    git::IdentityConfig,
    manager::ProfileManager,
    profile::{IdentityRecord, ProfileListing},
};

/// Adds or overwrites a profile
///
/// # Arguments
/// * `profile_name` - Profile name
/// * `name` - Git username
/// * `email` - Git email
pub fn add_profile<C: IdentityConfig>(
    manager: &ProfileManager<C>,
    profile_name: &str,
    name: &str,
    email: &str,
) -> AppResult<()> {
    manager
        .store()
        .add(profile_name, IdentityRecord::new(name, email))?;
    println!("{} '{}'", "profile added:".green(), profile_name);
    Ok(())
}

/// Removes a profile, listing the remaining ones when it does not exist
pub fn remove_profile<C: IdentityConfig>(
    manager: &ProfileManager<C>,
    profile_name: &str,
) -> AppResult<()> {
    if !manager.store().remove(profile_name)? {
        list_profiles(manager);
        return Err(AppError::ProfileNotFound(profile_name.to_string()));
    }
    println!("{} '{}'", "profile removed:".green(), profile_name);
    Ok(())
}

/// Switches the global Git user to a saved profile
pub fn switch_profile<C: IdentityConfig>(
    manager: &ProfileManager<C>,
    profile_name: &str,
) -> AppResult<()> {
    match manager.switch_profile(profile_name) {
        Ok(record) => {
            println!("{} '{}'", "switched to profile:".green(), profile_name);
            println!("  {} <{}>", record.display_name, record.email);
            Ok(())
        }
        Err(err @ AppError::ProfileNotFound(_)) => {
            list_profiles(manager);
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Lists all saved profiles
pub fn list_profiles<C: IdentityConfig>(manager: &ProfileManager<C>) {
    let listings: Vec<ProfileListing> = manager.describe_profiles();

    println!("{}", "saved profiles:".blue());
    if listings.is_empty() {
        println!("{}", "no profiles added yet".yellow());
        return;
    }

    for listing in &listings {
        println!("{}", format_listing(listing));
    }
}

/// Shows current Git user
pub fn show_current_user<C: IdentityConfig>(manager: &ProfileManager<C>) {
    match manager
        .current_identity()
        .filter(|identity| !identity.display_name.is_empty() || !identity.email.is_empty())
    {
        Some(identity) => println!(
            "{} {} <{}>",
            "current user:".blue(),
            identity.display_name,
            identity.email
        ),
        None => println!("{}", "git user information not found".yellow()),
    }
}

/// One listing line, `  work: Work Name <work@company.com> (active)`
pub fn format_listing(listing: &ProfileListing) -> String {
    let line: String = format!(
        "  {}: {} <{}>",
        listing.profile_name, listing.record.display_name, listing.record.email
    );
    if listing.active {
        format!("{} {}", line, "(active)".green())
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        git::{ConfigScope, GitConfig, IdentityBridge},
        storage::ProfileStore,
    };

    fn temp_manager() -> (tempfile::TempDir, ProfileManager<GitConfig>) {
        let dir = tempfile::tempdir().unwrap();
        let manager = ProfileManager::new(
            ProfileStore::new(dir.path().join("profiles.json")),
            IdentityBridge::new(GitConfig::new(ConfigScope::File(
                dir.path().join("gitconfig"),
            ))),
        );
        (dir, manager)
    }

    #[test]
    fn removing_unknown_profile_fails() {
        let (_dir, manager) = temp_manager();
        add_profile(&manager, "work", "Work Name", "work@company.com").unwrap();

        let err = remove_profile(&manager, "ghost").unwrap_err();

        assert!(matches!(err, AppError::ProfileNotFound(name) if name == "ghost"));
        assert_eq!(manager.store().list().len(), 1);
    }

    #[test]
    fn removing_known_profile_succeeds() {
        let (_dir, manager) = temp_manager();
        add_profile(&manager, "work", "Work Name", "work@company.com").unwrap();

        remove_profile(&manager, "work").unwrap();

        assert!(manager.store().list().is_empty());
    }

    #[test]
    fn switching_unknown_profile_fails_without_git_write() {
        let (dir, manager) = temp_manager();

        let err = switch_profile(&manager, "ghost").unwrap_err();

        assert!(matches!(err, AppError::ProfileNotFound(_)));
        assert!(!dir.path().join("gitconfig").exists());
    }

    #[test]
    fn active_listing_is_marked() {
        colored::control::set_override(false);
        let listing = ProfileListing {
            profile_name: "work".to_string(),
            record: IdentityRecord::new("Work Name", "work@company.com"),
            active: true,
        };
        assert_eq!(
            format_listing(&listing),
            "  work: Work Name <work@company.com> (active)"
        );

        let inactive = ProfileListing {
            active: false,
            ..listing
        };
        assert_eq!(format_listing(&inactive), "  work: Work Name <work@company.com>");
    }
}
