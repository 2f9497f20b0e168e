use dialoguer::{Confirm, Input};
use eventpro_core::{EventProError, EventProResult};

/// Asks for confirmation on the terminal, defaulting to "no".
pub struct TerminalConfirm;

impl eventpro_core::Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> EventProResult<bool> {
        Confirm::new()
            .with_prompt(format!("  {}", prompt))
            .default(false)
            .interact()
            .map_err(|e| EventProError::Io(std::io::Error::other(e)))
    }
}

/// Prompt for an optional text field; an empty answer means "skip".
pub fn optional_input(prompt: &str) -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {} (skip)", prompt))
        .default(String::new())
        .show_default(false)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
