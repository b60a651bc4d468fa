//! Interactive collection of the configuration record
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library

use crate::{
    config::{Answers, Configuration},
    constants::{tokens, DEFAULT_MOD_GROUP},
    error::Result,
    validation::{derive_mod_id, validate_mod_group, validate_mod_id, validate_not_blank},
};

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

fn validate_mod_name(value: &str) -> Result<()> {
    validate_not_blank("Mod name", value)
}

fn validate_mod_class(value: &str) -> Result<()> {
    validate_not_blank("Mod class", value)
}

/// Asks for every field missing from `answers` and returns the validated record.
///
/// Fields already present in `answers` are not asked for again.
pub fn collect_configuration(provider: &impl PromptProvider, answers: Answers) -> Result<Configuration> {
    let mod_name = match answers.mod_name {
        Some(name) => name,
        None => provider.prompt_text(&TextPromptConfig::new("Mod Name").validator(validate_mod_name))?,
    };

    let mod_id = match answers.mod_id {
        Some(id) => id,
        None => provider.prompt_text(
            &TextPromptConfig::new("Mod ID")
                .with_default(derive_mod_id(&mod_name))
                .validator(validate_mod_id),
        )?,
    };

    let mod_class = match answers.mod_class {
        Some(class) => class,
        None => {
            provider.note("This should be a valid Java class name. It is not validated.");
            provider.prompt_text(
                &TextPromptConfig::new("Mod Class")
                    .with_default(tokens::CLASS)
                    .validator(validate_mod_class),
            )?
        }
    };

    let mod_group = match answers.mod_group {
        Some(group) => group,
        None => {
            provider.note("Be careful not to include reserved Java keywords, they are not validated.");
            provider.prompt_text(
                &TextPromptConfig::new("Mod Group")
                    .with_default(DEFAULT_MOD_GROUP)
                    .validator(validate_mod_group),
            )?
        }
    };

    let mod_author = match answers.mod_author {
        Some(author) => author,
        None => {
            provider.note("One author only, more can be added later in the loader metadata.");
            provider.prompt_text(&TextPromptConfig::new("Mod Author").allow_empty())?
        }
    };

    let mod_description = match answers.mod_description {
        Some(description) => description,
        None => {
            provider.note("A short (1-3 sentence) description of your mod.");
            provider.prompt_text(&TextPromptConfig::new("Mod Description").allow_empty())?
        }
    };

    let remove_samples = match answers.remove_samples {
        Some(flag) => flag,
        None => {
            provider.note("The template includes sample content: an access widener/transformer entry, a test mixin and a datagen recipe.");
            provider.prompt_confirmation(&ConfirmationConfig::new("Remove this sample content?", true))?
        }
    };

    let delete_script = match answers.delete_script {
        Some(flag) => flag,
        None => provider.prompt_confirmation(&ConfirmationConfig::new("Delete the driver script when done?", true))?,
    };

    Answers {
        mod_name: Some(mod_name),
        mod_id: Some(mod_id),
        mod_class: Some(mod_class),
        mod_group: Some(mod_group),
        mod_author: Some(mod_author),
        mod_description: Some(mod_description),
        remove_samples: Some(remove_samples),
        delete_script: Some(delete_script),
    }
    .into_configuration()
}

/// Asks whether to proceed with `configuration`.
pub fn confirm_configuration(provider: &impl PromptProvider, configuration: &Configuration) -> Result<bool> {
    provider.note(&configuration.to_string());
    provider.prompt_confirmation(&ConfirmationConfig::new("Proceed with these settings?", true))
}
