//! File-tree mutation engine
//!
//! This module contains the operations the pipeline composes:
//! - `replacer`: literal search/replace passes over file contents
//! - `relocator`: merge-safe relocation of a namespace directory tree
//! - `renamer`: rename of marker directories
//! - `samples`: removal of the template's sample content
//! - `diagnostic`: non-fatal notices collected while mutating the tree

pub mod diagnostic;
pub mod relocator;
pub mod renamer;
pub mod replacer;
pub mod samples;

pub use diagnostic::{Diagnostic, Report};
pub use relocator::{find_conflicts, relocate, relocate_strict, Relocation, RelocationOutcome};
pub use renamer::{rename_marker_dirs, MarkerRename};
pub use replacer::{replace_in_tree, ReplaceStats, TreeTextReplacer};
