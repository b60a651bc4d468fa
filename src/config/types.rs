use std::fmt::Display;

use crate::error::Result;
use crate::validation::{validate_mod_group, validate_mod_id, validate_not_blank};

/// The values a template is instantiated with.
///
/// Built once before the pipeline starts and only borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub mod_name: String,
    pub mod_id: String,
    pub mod_class: String,
    pub mod_group: String,
    pub mod_author: String,
    pub mod_description: String,
    pub remove_samples: bool,
    pub delete_script: bool,
}

impl Configuration {
    pub fn validate(&self) -> Result<()> {
        validate_not_blank("Mod name", &self.mod_name)?;
        validate_mod_id(&self.mod_id)?;
        validate_not_blank("Mod class", &self.mod_class)?;
        validate_mod_group(&self.mod_group)?;
        Ok(())
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mod Name:        {}", self.mod_name)?;
        writeln!(f, "Mod ID:          {}", self.mod_id)?;
        writeln!(f, "Mod Class:       {}", self.mod_class)?;
        writeln!(f, "Mod Group:       {}", self.mod_group)?;
        writeln!(f, "Mod Author:      {}", self.mod_author)?;
        writeln!(f, "Mod Description: {}", self.mod_description)?;
        writeln!(f, "Remove Samples:  {}", self.remove_samples)?;
        write!(f, "Delete Script:   {}", self.delete_script)
    }
}
