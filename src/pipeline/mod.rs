//! Ordered instantiation pipeline
//!
//! A [`Pipeline`] runs a fixed list of [`Stage`]s against a [`Workspace`].
//! Every stage mutates the same tree and sees the effects of the previous
//! ones; non-fatal conditions are collected in a [`Report`].

pub mod plan;

use log::{debug, info};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::Configuration;
use crate::constants::{layout, tokens, DEFAULT_DRIVER_SCRIPT};
use crate::error::{Error, Result};
use crate::exclusion::ExclusionPolicy;
use crate::ioutils::{remove_file, rename};
use crate::scaffold::{
    relocate, relocate_strict, rename_marker_dirs, samples, Diagnostic, RelocationOutcome, Report,
    TreeTextReplacer,
};

pub use plan::{ReplacementPair, ReplacementPlan};

/// Handle on the project tree being instantiated.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    driver: String,
    policy: ExclusionPolicy,
}

impl Workspace {
    /// Opens `root` with the default driver script name.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::with_driver(root, DEFAULT_DRIVER_SCRIPT)
    }

    /// Opens `root`, reserving `driver` (a file name relative to the root)
    /// from text replacement.
    pub fn with_driver<P: AsRef<Path>>(root: P, driver: &str) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::RootNotFound { root: root.display().to_string() });
        }
        let policy = ExclusionPolicy::with_driver(&root, driver);
        Ok(Self { root, driver: driver.to_string(), policy })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    /// Resolves a path relative to the root.
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    pub fn java_root(&self) -> PathBuf {
        self.path(layout::JAVA_ROOT)
    }

    pub fn driver_path(&self) -> PathBuf {
        self.path(&self.driver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RemoveSamples,
    RenameClassFile,
    RenameResources,
    ReplaceText,
    RelocatePackage,
    RenameMarkerDirs,
    DeleteDriver,
}

impl Stage {
    /// Stages to run for `configuration`, in execution order.
    pub fn for_configuration(configuration: &Configuration) -> Vec<Stage> {
        let mut stages = Vec::new();
        if configuration.remove_samples {
            stages.push(Stage::RemoveSamples);
        }
        if configuration.mod_class != tokens::CLASS {
            stages.push(Stage::RenameClassFile);
        }
        stages.extend([
            Stage::RenameResources,
            Stage::ReplaceText,
            Stage::RelocatePackage,
            Stage::RenameMarkerDirs,
        ]);
        if configuration.delete_script {
            stages.push(Stage::DeleteDriver);
        }
        stages
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::RemoveSamples => "Removing samples...",
            Stage::RenameClassFile => "Renaming mod class file...",
            Stage::RenameResources => "Renaming resource files...",
            Stage::ReplaceText => "Performing mass search and replace...",
            Stage::RelocatePackage => "Moving package group...",
            Stage::RenameMarkerDirs => "Renaming directories/packages...",
            Stage::DeleteDriver => "Deleting driver script...",
        };
        write!(f, "{s}")
    }
}

/// Runs the instantiation stages for one configuration.
pub struct Pipeline<'a> {
    configuration: &'a Configuration,
    stages: Vec<Stage>,
    strict: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration, stages: Stage::for_configuration(configuration), strict: false }
    }

    /// Fails the run with `Error::ConflictsDetected` when any file or
    /// directory would be skipped because its destination already exists.
    ///
    /// Package relocation is refused up front in that case, so no source
    /// file is deleted; the run stops before the remaining stages.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn run(&self, workspace: &Workspace) -> Result<Report> {
        self.run_with(workspace, |_| {})
    }

    /// Runs every stage in order, calling `on_stage` before each one.
    ///
    /// The first fatal error aborts the run and leaves the tree as it is.
    pub fn run_with<F: FnMut(Stage)>(&self, workspace: &Workspace, on_stage: F) -> Result<Report> {
        let mut report = Report::default();
        self.run_into(workspace, &mut report, on_stage)?;
        Ok(report)
    }

    /// Same as [`Pipeline::run_with`] but records into a caller-owned
    /// `report`, which keeps the diagnostics gathered before a failure.
    pub fn run_into<F: FnMut(Stage)>(
        &self,
        workspace: &Workspace,
        report: &mut Report,
        mut on_stage: F,
    ) -> Result<()> {
        for stage in &self.stages {
            on_stage(*stage);
            info!("{stage}");
            self.run_stage(*stage, workspace, report)?;
        }

        if self.strict {
            let count = report.conflicts().count();
            if count > 0 {
                return Err(Error::ConflictsDetected { count });
            }
        }
        Ok(())
    }

    fn run_stage(&self, stage: Stage, workspace: &Workspace, report: &mut Report) -> Result<()> {
        let configuration = self.configuration;
        match stage {
            Stage::RemoveSamples => samples::remove_samples(workspace.root(), report),
            Stage::RenameClassFile => {
                let source = workspace.path(layout::CLASS_FILE);
                let target = source.with_file_name(format!("{}.java", configuration.mod_class));
                rename_if_present(&source, &target, "Rename class file", report)
            }
            Stage::RenameResources => {
                if configuration.mod_id == tokens::MOD_ID {
                    return Ok(());
                }
                for resource in [layout::ACCESS_WIDENER, layout::MIXINS] {
                    let source = workspace.path(resource);
                    let file_name = source
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or_default()
                        .replacen(tokens::MOD_ID, &configuration.mod_id, 1);
                    let target = source.with_file_name(file_name);
                    rename_if_present(&source, &target, "Rename resources", report)?;
                }
                Ok(())
            }
            Stage::ReplaceText => {
                let replacer = TreeTextReplacer::new(workspace.policy());
                let stats = ReplacementPlan::for_configuration(configuration).apply(&replacer)?;
                report.files_rewritten += stats.iter().map(|s| s.files_rewritten).sum::<usize>();
                Ok(())
            }
            Stage::RelocatePackage => {
                let java_root = workspace.java_root();
                let outcome = if self.strict {
                    relocate_strict(&java_root, tokens::GROUP, &configuration.mod_group)
                } else {
                    relocate(&java_root, tokens::GROUP, &configuration.mod_group)
                };
                match outcome {
                    Ok(RelocationOutcome::Unchanged) => {
                        report.push(Diagnostic::GroupUnchanged { group: configuration.mod_group.clone() });
                    }
                    Ok(RelocationOutcome::Relocated(relocation)) => {
                        report.files_moved += relocation.moved.len();
                        for (source, target) in relocation.conflicts {
                            report.push(Diagnostic::Conflict { source, target });
                        }
                    }
                    Ok(RelocationOutcome::Refused(conflicts)) => {
                        let count = conflicts.len();
                        for (source, target) in conflicts {
                            report.push(Diagnostic::Conflict { source, target });
                        }
                        return Err(Error::ConflictsDetected { count });
                    }
                    Err(Error::MissingSourceError { path }) => {
                        report.push(Diagnostic::MissingSource { path: PathBuf::from(path) });
                    }
                    Err(Error::NestedNamespace { old_path, new_path }) => {
                        report.push(Diagnostic::NestedNamespace {
                            old_path: PathBuf::from(old_path),
                            new_path: PathBuf::from(new_path),
                        });
                    }
                    Err(e) => return Err(e),
                }
                Ok(())
            }
            Stage::RenameMarkerDirs => {
                let java_root = workspace.java_root();
                if !java_root.is_dir() {
                    report.push(Diagnostic::MissingFile { stage: "Rename directories", path: java_root });
                    return Ok(());
                }
                let policy = workspace.policy().rooted_at(&java_root);
                let outcome = rename_marker_dirs(&policy, tokens::MOD_ID, &configuration.mod_id)?;
                report.dirs_renamed += outcome.renamed.len();
                for (source, target) in outcome.skipped {
                    report.push(Diagnostic::RenameTargetExists { source, target });
                }
                Ok(())
            }
            Stage::DeleteDriver => {
                let driver = workspace.driver_path();
                if driver.is_file() {
                    debug!("Removing driver script '{}'", driver.display());
                    remove_file(&driver)?;
                    report.files_removed += 1;
                } else {
                    report.push(Diagnostic::MissingFile { stage: "Delete driver", path: driver });
                }
                Ok(())
            }
        }
    }
}

fn rename_if_present(
    source: &Path,
    target: &Path,
    stage: &'static str,
    report: &mut Report,
) -> Result<()> {
    if source == target {
        return Ok(());
    }
    if !source.exists() {
        report.push(Diagnostic::MissingFile { stage, path: source.to_path_buf() });
        return Ok(());
    }
    if target.symlink_metadata().is_ok() {
        report.push(Diagnostic::RenameTargetExists {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
        });
        return Ok(());
    }
    debug!("Renaming '{}' -> '{}'", source.display(), target.display());
    rename(source, target)
}
