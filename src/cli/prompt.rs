//! Interactive prompts for fields not given on the command line

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::error::{Error, Result};

/// Whether prompts can be shown
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Use `value` when given, else ask for it.
///
/// Without a terminal a missing value is a validation error naming `flag`.
pub fn text(value: Option<String>, prompt: &str, flag: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !is_interactive() {
        return Err(Error::Validation(format!("{} is required", flag)));
    }

    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

/// Like [`text`] but an empty answer is accepted.
pub fn optional_text(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !is_interactive() {
        return Ok(String::new());
    }

    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Hidden input, asked for confirmation when `confirm` is set.
pub fn password(value: Option<String>, confirm: bool) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !is_interactive() {
        return Err(Error::Validation("--password is required".to_string()));
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Yes/no question; `false` without a terminal.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    if !is_interactive() {
        return Ok(false);
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_values_skip_prompt() {
        assert_eq!(
            text(Some("Clinic".to_string()), "Name", "--name").unwrap(),
            "Clinic"
        );
        assert_eq!(optional_text(Some("x".to_string()), "Note").unwrap(), "x");
        assert_eq!(password(Some("secret".to_string()), true).unwrap(), "secret");
    }
}
