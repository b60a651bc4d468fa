//! Answers loading and defaulting

use serde::Deserialize;
use std::path::Path;

use crate::config::types::Configuration;
use crate::constants::{tokens, DEFAULT_MOD_GROUP};
use crate::error::{Error, Result};
use crate::validation::derive_mod_id;

/// Partially filled configuration, as given on the command line or in a file.
///
/// Absent fields are either asked for interactively or filled from defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub mod_name: Option<String>,
    pub mod_id: Option<String>,
    pub mod_class: Option<String>,
    pub mod_group: Option<String>,
    pub mod_author: Option<String>,
    pub mod_description: Option<String>,
    pub remove_samples: Option<bool>,
    pub delete_script: Option<bool>,
}

impl Answers {
    /// Parses answers from a JSON document, falling back to YAML.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str(content) {
            Ok(answers) => Ok(answers),
            Err(json_err) => {
                log::debug!("Answers are not JSON ({json_err}), trying YAML");
                Ok(serde_yaml::from_str(content)?)
            }
        }
    }

    /// Reads answers from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::file("read", path, e))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Self::parse(&content),
        }
    }

    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: Answers) -> Answers {
        Answers {
            mod_name: other.mod_name.or(self.mod_name),
            mod_id: other.mod_id.or(self.mod_id),
            mod_class: other.mod_class.or(self.mod_class),
            mod_group: other.mod_group.or(self.mod_group),
            mod_author: other.mod_author.or(self.mod_author),
            mod_description: other.mod_description.or(self.mod_description),
            remove_samples: other.remove_samples.or(self.remove_samples),
            delete_script: other.delete_script.or(self.delete_script),
        }
    }

    /// Completes the answers with defaults and validates the result.
    ///
    /// # Errors
    /// * `Error::ValidationError` - if `mod_name` is missing or a value is malformed
    pub fn into_configuration(self) -> Result<Configuration> {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());

        let mod_name = trimmed(self.mod_name)
            .ok_or_else(|| Error::ValidationError("mod_name is required".into()))?;
        let mod_id = trimmed(self.mod_id).unwrap_or_else(|| derive_mod_id(&mod_name));

        let configuration = Configuration {
            mod_id,
            mod_class: trimmed(self.mod_class).unwrap_or_else(|| tokens::CLASS.to_string()),
            mod_group: trimmed(self.mod_group).unwrap_or_else(|| DEFAULT_MOD_GROUP.to_string()),
            mod_author: trimmed(self.mod_author).unwrap_or_default(),
            mod_description: trimmed(self.mod_description).unwrap_or_default(),
            remove_samples: self.remove_samples.unwrap_or(true),
            delete_script: self.delete_script.unwrap_or(true),
            mod_name,
        };
        configuration.validate()?;
        Ok(configuration)
    }
}
