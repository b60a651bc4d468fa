use crate::constants::{DEFAULT_DRIVER_SCRIPT, README_FILE};
use crate::ext::PathExt;
use log::trace;
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

/// Segment names that exclude a path wherever they appear.
const EXCLUDED_SEGMENTS: &[&str] = &["build", ".gradle"];

/// Directory name excluded only when it is the final segment of a directory.
const EXCLUDED_DIRECTORY: &str = "gradle";

/// Decides which parts of a project tree are never traversed or mutated.
///
/// Rules are evaluated per segment of the path relative to `root`, so the
/// location of the root itself (for instance a hidden temporary directory)
/// never excludes the whole tree.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    root: PathBuf,
    reserved_files: Vec<String>,
}

impl ExclusionPolicy {
    /// Creates a policy for `root` reserving `README.md` and the default driver script.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_driver(root, DEFAULT_DRIVER_SCRIPT)
    }

    /// Creates a policy reserving `README.md` and the given driver script name.
    pub fn with_driver<P: AsRef<Path>>(root: P, driver: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            reserved_files: vec![README_FILE.to_string(), driver.to_string()],
        }
    }

    /// Returns a copy of this policy evaluated against a different root.
    pub fn rooted_at<P: AsRef<Path>>(&self, root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), reserved_files: self.reserved_files.clone() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks whether `path` must be skipped by every traversal.
    ///
    /// # Arguments
    /// * `path` - Path to check, absolute or relative to the policy root
    /// * `is_dir` - Whether the path is a directory
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        let segments = path.relative_to(&self.root).segments();

        if segments
            .iter()
            .any(|segment| segment.starts_with('.') || EXCLUDED_SEGMENTS.contains(&segment.as_str()))
        {
            return true;
        }

        is_dir && segments.last().is_some_and(|last| last == EXCLUDED_DIRECTORY)
    }

    /// Checks whether a file is reserved from content replacement by its name.
    pub fn is_reserved(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.reserved_files.iter().any(|reserved| reserved == name))
    }

    /// Predicate for `walkdir`'s `filter_entry`, pruning excluded directories
    /// before they are opened.
    pub fn allows(&self, entry: &DirEntry) -> bool {
        let excluded = self.is_excluded(entry.path(), entry.file_type().is_dir());
        if excluded {
            trace!("Excluding '{}'", entry.path().display());
        }
        !excluded
    }
}
