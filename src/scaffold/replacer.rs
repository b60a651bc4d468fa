use log::{debug, trace};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::exclusion::ExclusionPolicy;
use crate::ioutils::{read_text, write_file};

/// Counters for a single replacement pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceStats {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub binary_skipped: usize,
}

/// Walks a tree under an [`ExclusionPolicy`] and rewrites file contents with
/// literal search/replace passes.
///
/// Every call to [`TreeTextReplacer::replace`] is a full, independent
/// traversal. Callers that need several substitutions run one pass per pair,
/// in order, so a later pass sees the text an earlier one introduced.
pub struct TreeTextReplacer<'a> {
    policy: &'a ExclusionPolicy,
}

impl<'a> TreeTextReplacer<'a> {
    pub fn new(policy: &'a ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// Replaces every non-overlapping occurrence of `search` with `replace`
    /// in all non-excluded, non-reserved text files below the policy root.
    ///
    /// Binary files (content that is not valid UTF-8) are skipped silently.
    /// Files without an occurrence are not written.
    ///
    /// # Errors
    /// * `Error::ValidationError` - if `search` is empty
    /// * I/O errors while reading, writing or walking abort the pass
    pub fn replace(&self, search: &str, replace: &str) -> Result<ReplaceStats> {
        if search.is_empty() {
            return Err(Error::ValidationError("search string must not be empty".into()));
        }

        debug!("Replacing '{search}' with '{replace}' under '{}'", self.policy.root().display());
        let mut stats = ReplaceStats::default();

        let walker = WalkDir::new(self.policy.root())
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.policy.allows(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || self.policy.is_reserved(entry.path()) {
                continue;
            }

            stats.files_scanned += 1;
            match self.replace_in_file(entry.path(), search, replace)? {
                FileOutcome::Rewritten => stats.files_rewritten += 1,
                FileOutcome::Binary => stats.binary_skipped += 1,
                FileOutcome::Untouched => {}
            }
        }

        Ok(stats)
    }

    fn replace_in_file(&self, path: &Path, search: &str, replace: &str) -> Result<FileOutcome> {
        let Some(content) = read_text(path)? else {
            trace!("Skipping binary file '{}'", path.display());
            return Ok(FileOutcome::Binary);
        };

        if !content.contains(search) {
            return Ok(FileOutcome::Untouched);
        }

        let new_content = content.replace(search, replace);
        if new_content == content {
            return Ok(FileOutcome::Untouched);
        }

        debug!("Rewriting '{}'", path.display());
        write_file(&new_content, path)?;
        Ok(FileOutcome::Rewritten)
    }
}

enum FileOutcome {
    Rewritten,
    Untouched,
    Binary,
}

/// Runs a single replacement pass over `root` with the default exclusion rules.
pub fn replace_in_tree<P: AsRef<Path>>(root: P, search: &str, replace: &str) -> Result<ReplaceStats> {
    let policy = ExclusionPolicy::new(root);
    TreeTextReplacer::new(&policy).replace(search, replace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn replaces_all_occurrences() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/A.java", b"modtemplate modtemplate\nmodtemplate");

        let stats = replace_in_tree(dir.path(), "modtemplate", "mymod").unwrap();

        assert_eq!(read(dir.path(), "src/A.java"), "mymod mymod\nmymod");
        assert_eq!(stats.files_rewritten, 1);
    }

    #[test]
    fn skips_excluded_and_reserved_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for rel in [
            "build/out.txt",
            ".git/HEAD",
            ".gradle/cache.txt",
            "gradle/wrapper/gradle-wrapper.properties",
            "sub/build/x.txt",
            "README.md",
            "scaffold.sh",
        ] {
            write(root, rel, b"modtemplate");
        }
        write(root, "gradle.properties", b"mod_id=modtemplate");

        replace_in_tree(root, "modtemplate", "mymod").unwrap();

        for rel in [
            "build/out.txt",
            ".git/HEAD",
            ".gradle/cache.txt",
            "gradle/wrapper/gradle-wrapper.properties",
            "sub/build/x.txt",
            "README.md",
            "scaffold.sh",
        ] {
            assert_eq!(read(root, rel), "modtemplate", "{rel} should be untouched");
        }
        assert_eq!(read(root, "gradle.properties"), "mod_id=mymod");
    }

    #[test]
    fn binary_files_are_skipped_silently() {
        let dir = TempDir::new().unwrap();
        let bytes = [0xffu8, 0xfe, b'm', b'o', b'd', 0x00, 0x80];
        write(dir.path(), "assets/icon.png", &bytes);

        let stats = replace_in_tree(dir.path(), "mod", "x").unwrap();

        assert_eq!(fs::read(dir.path().join("assets/icon.png")).unwrap(), bytes);
        assert_eq!(stats.binary_skipped, 1);
    }

    #[test]
    fn files_without_match_are_not_rewritten() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"nothing here");
        let before = fs::metadata(dir.path().join("a.txt")).unwrap().modified().unwrap();

        let stats = replace_in_tree(dir.path(), "modtemplate", "mymod").unwrap();

        let after = fs::metadata(dir.path().join("a.txt")).unwrap().modified().unwrap();
        assert_eq!(before, after);
        assert_eq!(stats.files_scanned, 1);
        assert_eq!(stats.files_rewritten, 0);
    }

    #[test]
    fn sequential_passes_see_earlier_output() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"foo");

        replace_in_tree(dir.path(), "foo", "foobar").unwrap();
        replace_in_tree(dir.path(), "bar", "baz").unwrap();

        // A combined single pass would have produced "foobar".
        assert_eq!(read(dir.path(), "a.txt"), "foobaz");
    }

    #[test]
    fn empty_search_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = replace_in_tree(dir.path(), "", "x").unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }
}
