//! Dialoguer-based implementations of prompt interfaces

use super::interface::{ConfirmationConfig, PromptProvider, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(config.allow_empty);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        if let Some(validator) = config.validator {
            input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
                validator(value.trim()).map_err(|e| e.to_string())
            });
        }

        Ok(input.interact_text()?.trim().to_string())
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}

impl PromptProvider for DialoguerPrompter {}
