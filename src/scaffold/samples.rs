use log::{debug, info};
use std::path::Path;

use crate::constants::samples::{DIRECTORIES, FILES, LINE_EDITS};
use crate::error::Result;
use crate::ioutils::{read_text, remove_dir_all, remove_file, write_file};

use super::diagnostic::{Diagnostic, Report};

const STAGE: &str = "Remove samples";

/// Drops every line containing `marker` (case-insensitive) and appends a newline.
///
/// # Returns
/// * `Result<bool>` - `false` when the file does not exist or is not text
pub fn remove_sample_lines<P: AsRef<Path>>(path: P, marker: &str) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }
    let Some(content) = read_text(path)? else {
        return Ok(false);
    };

    let marker = marker.to_lowercase();
    let mut kept: String = content
        .split_inclusive('\n')
        .filter(|line| !line.to_lowercase().contains(&marker))
        .collect();
    kept.push('\n');

    debug!("Stripping '{marker}' lines from '{}'", path.display());
    write_file(&kept, path)?;
    Ok(true)
}

/// Deletes the sample content bundled with the template.
pub fn remove_samples(root: &Path, report: &mut Report) -> Result<()> {
    info!("Removing samples...");

    for rel in FILES {
        let path = root.join(rel);
        if path.is_file() {
            remove_file(&path)?;
            report.files_removed += 1;
        } else {
            report.push(Diagnostic::MissingFile { stage: STAGE, path });
        }
    }

    for rel in DIRECTORIES {
        let path = root.join(rel);
        if path.is_dir() {
            remove_dir_all(&path)?;
        }
    }

    for (rel, marker) in LINE_EDITS {
        let path = root.join(rel);
        if !remove_sample_lines(&path, marker)? {
            report.push(Diagnostic::MissingFile { stage: STAGE, path });
        }
    }

    Ok(())
}
