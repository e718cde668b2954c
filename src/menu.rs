use std::fmt;

use colored::Colorize;
use inquire::Select;

use crate::{
    commands::{add_profile, list_profiles, remove_profile, show_current_user, switch_profile},
    error::AppResult,
    git::IdentityConfig,
    manager::ProfileManager,
    validation::{prompt_until_valid, validate_profile_name, validate_required},
};

/// Entry in a profile picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Profile(String),
    Back,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Profile(name) => f.write_str(name),
            MenuChoice::Back => f.write_str("back"),
        }
    }
}

/// Runs interactive menu interface
pub fn run_menu<C: IdentityConfig>(manager: &ProfileManager<C>) -> AppResult<()> {
    loop {
        let actions: Vec<&'static str> = vec![
            "switch profile",
            "add profile",
            "remove profile",
            "show current user",
            "list profiles",
            "quit",
        ];

        let action_selected: &'static str =
            Select::new(&format!("{}", "select action".blue()), actions).prompt()?;

        let result: AppResult<()> = match action_selected {
            "switch profile" => menu_switch_profile(manager),
            "add profile" => menu_add_profile(manager),
            "remove profile" => menu_remove_profile(manager),
            "show current user" => {
                show_current_user(manager);
                Ok(())
            }
            "list profiles" => {
                list_profiles(manager);
                Ok(())
            }
            "quit" => {
                println!("{}", "quitting".yellow());
                break Ok(());
            }
            _ => unreachable!("unexpected input"),
        };

        // Failed actions are reported and the menu keeps running
        if let Err(err) = result {
            println!("{}", err.to_string().red());
        }
    }
}

/// Menu for switching profiles
fn menu_switch_profile<C: IdentityConfig>(manager: &ProfileManager<C>) -> AppResult<()> {
    if let Some(profile_name) = select_profile(manager, "select profile to switch:")? {
        switch_profile(manager, &profile_name)?;
    }
    Ok(())
}

/// Menu for adding a profile
fn menu_add_profile<C: IdentityConfig>(manager: &ProfileManager<C>) -> AppResult<()> {
    let profile_name: String = prompt_until_valid(
        &format!("{}", "enter profile name:".blue()),
        validate_profile_name,
    )?;

    let name: String = prompt_until_valid(&format!("{}", "enter git username:".blue()), |input| {
        validate_required("Username", input)
    })?;

    let email: String = prompt_until_valid(&format!("{}", "enter git email:".blue()), |input| {
        validate_required("Email", input)
    })?;

    add_profile(manager, &profile_name, &name, &email)
}

/// Menu for removing a profile
fn menu_remove_profile<C: IdentityConfig>(manager: &ProfileManager<C>) -> AppResult<()> {
    if let Some(profile_name) = select_profile(manager, "select profile to remove:")? {
        remove_profile(manager, &profile_name)?;
    }
    Ok(())
}

/// Prompts for a saved profile. `None` when the user picks back or nothing is saved.
fn select_profile<C: IdentityConfig>(
    manager: &ProfileManager<C>,
    prompt_message: &str,
) -> AppResult<Option<String>> {
    let choices: Vec<MenuChoice> = build_choices(manager.store().list().keys().cloned());
    if choices.len() == 1 {
        println!("{}", "no profiles added yet".yellow());
        return Ok(None);
    }

    match Select::new(&format!("{}", prompt_message.blue()), choices).prompt()? {
        MenuChoice::Profile(profile_name) => Ok(Some(profile_name)),
        MenuChoice::Back => Ok(None),
    }
}

/// Builds profile choices followed by a back entry
pub fn build_choices(profile_names: impl IntoIterator<Item = String>) -> Vec<MenuChoice> {
    let mut choices: Vec<MenuChoice> = profile_names
        .into_iter()
        .map(MenuChoice::Profile)
        .collect();
    choices.push(MenuChoice::Back);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_named_back_is_not_the_back_entry() {
        let choices = build_choices(["back".to_string(), "work".to_string()]);
        assert_eq!(
            choices,
            [
                MenuChoice::Profile("back".to_string()),
                MenuChoice::Profile("work".to_string()),
                MenuChoice::Back,
            ]
        );
        assert_eq!(choices[0].to_string(), choices[2].to_string());
        assert_ne!(choices[0], choices[2]);
    }
}
