use std::fmt::Display;
use std::path::PathBuf;

/// A non-fatal condition met while mutating the tree.
///
/// Diagnostics never stop the pipeline by themselves; the caller decides
/// from the final [`Report`] whether any of them should fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Relocation was requested to the group it already uses.
    GroupUnchanged { group: String },
    /// The namespace directory to relocate does not exist.
    MissingSource { path: PathBuf },
    /// One namespace directory lies inside the other.
    NestedNamespace { old_path: PathBuf, new_path: PathBuf },
    /// A file was not moved because the destination already exists.
    Conflict { source: PathBuf, target: PathBuf },
    /// A marker directory was not renamed because the new name is taken.
    RenameTargetExists { source: PathBuf, target: PathBuf },
    /// A file the template is expected to contain is absent.
    MissingFile { stage: &'static str, path: PathBuf },
}

impl Diagnostic {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Diagnostic::Conflict { .. } | Diagnostic::RenameTargetExists { .. })
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::GroupUnchanged { group } => {
                write!(f, "No group change needed: {group}")
            }
            Diagnostic::MissingSource { path } => {
                write!(f, "Old group path does not exist: {}", path.display())
            }
            Diagnostic::NestedNamespace { old_path, new_path } => write!(
                f,
                "Skipping relocation of '{}' to '{}' (one namespace is nested in the other)",
                old_path.display(),
                new_path.display()
            ),
            Diagnostic::Conflict { source, target } => write!(
                f,
                "Skipping existing file: '{}' (source '{}' not moved)",
                target.display(),
                source.display()
            ),
            Diagnostic::RenameTargetExists { source, target } => write!(
                f,
                "Skipping rename of '{}' ('{}' already exists)",
                source.display(),
                target.display()
            ),
            Diagnostic::MissingFile { stage, path } => {
                write!(f, "{stage}: '{}' does not exist", path.display())
            }
        }
    }
}

/// Outcome of a pipeline run: diagnostics in the order they occurred plus counters.
#[derive(Debug, Default, Clone)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    pub files_rewritten: usize,
    pub files_moved: usize,
    pub dirs_renamed: usize,
    pub files_removed: usize,
}

impl Report {
    /// Records a diagnostic and logs it as a warning.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_conflict())
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts().next().is_some()
    }
}
