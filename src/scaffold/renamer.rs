use log::{debug, info};
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::error::Result;
use crate::exclusion::ExclusionPolicy;
use crate::ioutils::rename;

/// Directories renamed, and those left alone because the new name was taken.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkerRename {
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<(PathBuf, PathBuf)>,
}

/// Renames every directory named exactly `marker` below the policy root to `new_name`.
///
/// Directories are collected first and renamed deepest first, so a rename
/// never invalidates a path that is still to be visited. The root itself is
/// never renamed and excluded subtrees are not entered.
pub fn rename_marker_dirs(policy: &ExclusionPolicy, marker: &str, new_name: &str) -> Result<MarkerRename> {
    let mut outcome = MarkerRename::default();
    if marker == new_name {
        return Ok(outcome);
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(policy.root())
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| policy.allows(entry))
    {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.file_name() == marker {
            matches.push((entry.depth(), entry.into_path()));
        }
    }
    matches.sort_by(|(a, _), (b, _)| b.cmp(a));
    debug!("Found {} '{marker}' director(ies)", matches.len());

    for (_, source) in matches {
        let target = source.with_file_name(new_name);
        if target.symlink_metadata().is_ok() {
            outcome.skipped.push((source, target));
            continue;
        }
        info!("Renaming {} -> {}", source.display(), target.display());
        rename(&source, &target)?;
        outcome.renamed.push((source, target));
    }

    Ok(outcome)
}
