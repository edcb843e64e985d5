//! Filesystem primitives used by the store.
//!
//! Directories are created owner-only (`0o700`) and entry files are created
//! owner-only (`0o600`).  Mode bits only apply on Unix and only when the
//! directory or file is newly created; an existing file keeps its mode.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::{StoreError, StoreResult};

/// Permission bits for directories created by the store.
pub const DIR_MODE: u32 = 0o700;
/// Permission bits for entry files created by the store.
pub const FILE_MODE: u32 = 0o600;

/// Writes `value` as the full content of `path`, creating missing parents.
///
/// Any failure, including a missing component, is reported as
/// [`StoreError::Io`].
pub fn write_entry(path: &Path, value: &str) -> StoreResult<()> {
    if let Some(dir) = path.parent() {
        create_private_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_private_for_write(path).map_err(io_err)?;
    file.write_all(value.as_bytes()).map_err(io_err)?;
    Ok(())
}

/// Reads the whole file as text.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` rather than
/// failing the read.
pub fn read_entry(path: &Path) -> StoreResult<String> {
    let bytes = fs::read(path).map_err(|e| StoreError::from_io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Removes a single entry file.
pub fn remove_entry(path: &Path) -> StoreResult<()> {
    fs::remove_file(path).map_err(|e| StoreError::from_io(path, e))
}

/// Returns the names in `dir`, sorted lexicographically.
///
/// Files and subdirectories are not told apart.  A missing directory is
/// [`StoreError::NotFound`], not an empty list.
pub fn list_names(dir: &Path) -> StoreResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| StoreError::from_io(dir, e))? {
        let entry = entry.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(unix)]
fn create_private_dir_all(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir_all(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn open_private_for_write(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_private_for_write(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
