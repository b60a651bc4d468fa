use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::{create_dir_all, move_file, prune_empty_ancestors, remove_dir_all};

/// Result of a relocation that actually ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    /// Destination paths of the files that were moved.
    pub moved: Vec<PathBuf>,
    /// `(source, target)` pairs left unmoved because the target existed.
    pub conflicts: Vec<(PathBuf, PathBuf)>,
    /// Empty ancestors removed after the old subtree was deleted.
    pub pruned: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationOutcome {
    /// Old and new group are identical, nothing was touched.
    Unchanged,
    Relocated(Relocation),
    /// Strict relocation found `(source, target)` pairs that would be
    /// skipped; nothing was moved or deleted.
    Refused(Vec<(PathBuf, PathBuf)>),
}

/// Moves the directory tree of one dot-separated namespace onto another below `root`.
///
/// Files are merged into the destination: an existing destination file is
/// never overwritten, the source file is skipped and recorded as a conflict.
/// Once every movable file has been moved the whole old subtree is deleted,
/// including skipped files, and empty ancestors of the old path are pruned.
///
/// # Errors
/// * `Error::MissingSourceError` - the old namespace directory does not exist
/// * `Error::NestedNamespace` - one namespace directory contains the other
/// * I/O errors abort the relocation midway
pub fn relocate<P: AsRef<Path>>(root: P, old_group: &str, new_group: &str) -> Result<RelocationOutcome> {
    relocate_with(root.as_ref(), old_group, new_group, false)
}

/// Like [`relocate`], but returns [`RelocationOutcome::Refused`] without
/// touching the tree when any source file would be skipped.
pub fn relocate_strict<P: AsRef<Path>>(
    root: P,
    old_group: &str,
    new_group: &str,
) -> Result<RelocationOutcome> {
    relocate_with(root.as_ref(), old_group, new_group, true)
}

/// Lists the `(source, target)` file pairs a relocation would skip because
/// the target already exists. Read-only.
pub fn find_conflicts<P: AsRef<Path>>(
    root: P,
    old_group: &str,
    new_group: &str,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let root = root.as_ref();
    match namespace_paths(root, old_group, new_group)? {
        Some((old_path, new_path)) => scan_conflicts(&old_path, &new_path),
        None => Ok(Vec::new()),
    }
}

/// Resolves both namespace directories, `None` when the groups are identical.
fn namespace_paths(root: &Path, old_group: &str, new_group: &str) -> Result<Option<(PathBuf, PathBuf)>> {
    if old_group == new_group {
        return Ok(None);
    }

    let old_path = root.join_namespace(old_group);
    let new_path = root.join_namespace(new_group);

    if !old_path.exists() {
        return Err(Error::MissingSourceError { path: old_path.display().to_string() });
    }
    if old_path.starts_with(&new_path) || new_path.starts_with(&old_path) {
        return Err(Error::NestedNamespace {
            old_path: old_path.display().to_string(),
            new_path: new_path.display().to_string(),
        });
    }
    Ok(Some((old_path, new_path)))
}

fn scan_conflicts(old_path: &Path, new_path: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut conflicts = Vec::new();
    for entry in WalkDir::new(old_path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let target = new_path.join(entry.path().relative_to(old_path));
        if target.symlink_metadata().is_ok() {
            conflicts.push((entry.into_path(), target));
        }
    }
    Ok(conflicts)
}

fn relocate_with(root: &Path, old_group: &str, new_group: &str, strict: bool) -> Result<RelocationOutcome> {
    let Some((old_path, new_path)) = namespace_paths(root, old_group, new_group)? else {
        info!("No group change needed: {old_group}");
        return Ok(RelocationOutcome::Unchanged);
    };

    if strict {
        let conflicts = scan_conflicts(&old_path, &new_path)?;
        if !conflicts.is_empty() {
            info!("Refusing to move {}: {} file(s) would be skipped", old_path.display(), conflicts.len());
            return Ok(RelocationOutcome::Refused(conflicts));
        }
    }

    create_dir_all(&new_path)?;
    info!("Moving contents from {} -> {}", old_path.display(), new_path.display());

    let entries = WalkDir::new(&old_path)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut relocation = Relocation {
        old_path: old_path.clone(),
        new_path: new_path.clone(),
        ..Default::default()
    };

    for entry in entries {
        let relative = entry.path().relative_to(&old_path);
        let target = new_path.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
            continue;
        }

        if target.symlink_metadata().is_ok() {
            debug!("Skipping existing file: {}", target.display());
            relocation.conflicts.push((entry.path().to_path_buf(), target));
            continue;
        }

        debug!("Moving '{}' -> '{}'", entry.path().display(), target.display());
        move_file(entry.path(), &target)?;
        relocation.moved.push(target);
    }

    info!("Removing old group directory: {}", old_path.display());
    remove_dir_all(&old_path)?;

    if let Some(parent) = old_path.parent() {
        relocation.pruned = prune_empty_ancestors(parent, root)?;
        for dir in &relocation.pruned {
            info!("Removing now-empty directory: {}", dir.display());
        }
    }

    Ok(RelocationOutcome::Relocated(relocation))
}
