//! Interactive prompts for still-missing configuration fields

use dialoguer::{Input, Password};
use pr_mill::error::{Error, Result};

/// Prompt for the GitHub personal access token with hidden input
pub fn prompt_token() -> Result<String> {
    Password::new()
        .with_prompt("Enter your GitHub personal access token")
        .interact()
        .map_err(|e| Error::Internal(format!("Failed to read token: {e}")))
}

/// Prompt for the GitHub username
pub fn prompt_username() -> Result<String> {
    Input::new()
        .with_prompt("Enter your GitHub username")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Username is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| Error::Internal(format!("Failed to read username: {e}")))
}

/// Prompt for the target repository name
pub fn prompt_repo() -> Result<String> {
    Input::new()
        .with_prompt("Enter the target repository name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Repository name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| Error::Internal(format!("Failed to read repository: {e}")))
}
