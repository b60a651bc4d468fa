//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library
//! implementation, so the configuration flow can be driven by scripted
//! answers in tests.

use crate::error::Result;

/// Checks an answer; an `Err` makes the prompter ask again.
pub type Validator = fn(&str) -> Result<()>;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    pub allow_empty: bool,
    pub validator: Option<Validator>,
}

impl TextPromptConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), default: None, allow_empty: false, validator: None }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

impl ConfirmationConfig {
    pub fn new(prompt: impl Into<String>, default: bool) -> Self {
        Self { prompt: prompt.into(), default }
    }
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Everything the configuration flow needs from a user interface.
pub trait PromptProvider: TextPrompter + ConfirmationPrompter {
    /// Shows an informational line before a question.
    fn note(&self, message: &str) {
        println!("{message}");
    }
}
