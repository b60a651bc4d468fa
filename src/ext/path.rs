use std::path::{Component, Path, PathBuf};

/// Extension trait for Path with the helpers the tree walkers share
pub trait PathExt {
    /// Returns the path relative to `root`, or the path itself when it is not below `root`.
    ///
    /// # Examples
    /// ```
    /// use modscaffold::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/tmp/project/src/Main.java");
    /// assert_eq!(path.relative_to(Path::new("/tmp/project")), Path::new("src/Main.java"));
    /// ```
    fn relative_to(&self, root: &Path) -> &Path;

    /// Iterates the normal (named) segments of the path as strings.
    ///
    /// `.` and `..` components and the root are dropped, non UTF-8 segments
    /// are converted lossily.
    fn segments(&self) -> Vec<String>;

    /// Maps a dot-separated namespace such as `com.example` onto nested
    /// directories below this path.
    ///
    /// # Examples
    /// ```
    /// use modscaffold::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("src/main/java").join_namespace("org.foo");
    /// assert_eq!(dir, Path::new("src/main/java/org/foo"));
    /// ```
    fn join_namespace(&self, namespace: &str) -> PathBuf;
}

impl PathExt for Path {
    fn relative_to(&self, root: &Path) -> &Path {
        self.strip_prefix(root).unwrap_or(self)
    }

    fn segments(&self) -> Vec<String> {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    fn join_namespace(&self, namespace: &str) -> PathBuf {
        namespace
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(self.to_path_buf(), |path, segment| path.join(segment))
    }
}
