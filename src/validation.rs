use colored::Colorize;
use inquire::Text;

use crate::error::{AppError, AppResult};

/// Prompts user for input until valid input is provided
pub fn prompt_until_valid<F>(prompt_message: &str, input_validation: F) -> AppResult<String>
where
    F: Fn(&str) -> AppResult<()>,
{
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

/// Validates a profile name. Names are case-sensitive and must not be blank.
pub fn validate_profile_name(profile_name: &str) -> AppResult<()> {
    if profile_name.trim().is_empty() {
        Err(AppError::Validation("Profile name cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates a prompted identity value (name or email). Content is free-form.
///
/// # Arguments
/// * `label` - Field name used in the error message
/// * `value` - Inputted value
pub fn validate_required(label: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        Err(AppError::Validation(format!("{label} cannot be empty")))
    } else {
        Ok(())
    }
}
