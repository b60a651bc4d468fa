use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a file as UTF-8 text.
///
/// Returns `Ok(None)` when the content is not valid UTF-8, which callers treat
/// as a binary file to be left alone.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::InvalidData => Ok(None),
        Err(e) => Err(Error::file("read", path, e)),
    }
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::write(dest_path, content).map_err(|e| Error::file("write", dest_path, e))
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::create_dir_all(dest_path).map_err(|e| Error::file("create directory", dest_path, e))
}

/// Renames a file or directory, failing if the source is missing.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    fs::rename(source, dest.as_ref()).map_err(|e| Error::file("rename", source, e))
}

/// Moves a file, creating the destination's parent directories.
///
/// Falls back to copy and remove when a plain rename is refused, for example
/// across filesystems.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    if let Some(parent) = dest.parent() {
        create_dir_all(parent)?;
    }

    if let Err(rename_err) = fs::rename(source, dest) {
        log::debug!(
            "Rename of '{}' failed ({rename_err}), copying instead",
            source.display()
        );
        fs::copy(source, dest).map_err(|e| Error::file("copy", source, e))?;
        fs::remove_file(source).map_err(|e| Error::file("remove", source, e))?;
    }
    Ok(())
}

pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| Error::file("remove", path, e))
}

pub fn remove_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_dir_all(path).map_err(|e| Error::file("remove directory", path, e))
}

/// Removes empty directories from `start` upwards, stopping at `stop` (exclusive)
/// or at the first directory that still has entries.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The directories that were removed, deepest first
pub fn prune_empty_ancestors<P: AsRef<Path>, Q: AsRef<Path>>(
    start: P,
    stop: Q,
) -> Result<Vec<std::path::PathBuf>> {
    let stop = stop.as_ref();
    let mut removed = Vec::new();
    let mut current = Some(start.as_ref());

    while let Some(dir) = current {
        if dir == stop || !dir.starts_with(stop) || !dir.is_dir() {
            break;
        }
        let mut entries = fs::read_dir(dir).map_err(|e| Error::file("read directory", dir, e))?;
        if entries.next().is_some() {
            break;
        }
        fs::remove_dir(dir).map_err(|e| Error::file("remove directory", dir, e))?;
        removed.push(dir.to_path_buf());
        current = dir.parent();
    }

    Ok(removed)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
