//! Locating raw data files
//!
//! The device writes numbered files (`*.000`, `*.001`, ...). Their names
//! sort in recording order.

use crate::error::{ResmartError, Result};
use glob::{glob, Pattern};
use std::io;
use std::path::{Path, PathBuf};

/// Glob for the device's three-digit file extensions
pub const DATA_FILE_PATTERN: &str = "*.[0-9][0-9][0-9]";

/// List the raw data files in `dir`, sorted by name
pub fn find_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ResmartError::io_at(
            dir,
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let dir_str = dir.to_str().ok_or_else(|| {
        ResmartError::io_at(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "path is not valid UTF-8"),
        )
    })?;
    let pattern = format!("{}/{}", Pattern::escape(dir_str), DATA_FILE_PATTERN);

    let entries = glob(&pattern).map_err(|e| {
        ResmartError::io_at(dir, io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ResmartError::io_at(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
