use std::fmt::Display;

use crate::config::Configuration;
use crate::constants::tokens;
use crate::error::{Error, Result};
use crate::scaffold::{ReplaceStats, TreeTextReplacer};

/// One literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    search: String,
    replace: String,
}

impl ReplacementPair {
    /// # Errors
    /// * `Error::ValidationError` - if `search` is empty
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Result<Self> {
        let search = search.into();
        if search.is_empty() {
            return Err(Error::ValidationError("replacement search string must not be empty".into()));
        }
        Ok(Self { search, replace: replace.into() })
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }
}

impl Display for ReplacementPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' -> '{}'", self.search, self.replace)
    }
}

/// Ordered list of full-tree replacement passes.
///
/// Passes run one after another over the whole tree, so a pass may match
/// text produced by an earlier one. Reordering the pairs changes the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan {
    pairs: Vec<ReplacementPair>,
}

impl ReplacementPlan {
    pub fn new(pairs: Vec<ReplacementPair>) -> Self {
        Self { pairs }
    }

    /// The six template tokens, longest and most specific first: class name,
    /// display name, mod id, group, author, description.
    pub fn for_configuration(configuration: &Configuration) -> Self {
        let pairs = [
            (tokens::CLASS, &configuration.mod_class),
            (tokens::DISPLAY_NAME, &configuration.mod_name),
            (tokens::MOD_ID, &configuration.mod_id),
            (tokens::GROUP, &configuration.mod_group),
            (tokens::AUTHOR, &configuration.mod_author),
            (tokens::DESCRIPTION, &configuration.mod_description),
        ]
        .into_iter()
        .map(|(search, replace)| ReplacementPair {
            search: search.to_string(),
            replace: replace.clone(),
        })
        .collect();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ReplacementPair] {
        &self.pairs
    }

    /// Runs every pass in order, one full traversal per pair.
    pub fn apply(&self, replacer: &TreeTextReplacer) -> Result<Vec<ReplaceStats>> {
        self.pairs
            .iter()
            .map(|pair| {
                log::info!("Replacing {pair}");
                replacer.replace(pair.search(), pair.replace())
            })
            .collect()
    }
}
