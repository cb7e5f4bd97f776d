//! Non-recursive listing of the working directory.

use crate::error::{OrganizeError, OrganizeResult};
use crate::work_dir::WorkingDirectory;
use std::collections::HashSet;
use std::fs;

/// Filenames that are never treated as movable data files.
///
/// These represent the tool's own manifest and source. The list is a
/// fixed constant, not configurable.
pub const RESERVED_FILES: [&str; 2] = ["Cargo.toml", "main.rs"];

/// The immediate contents of the working directory, partitioned into
/// movable files and pre-existing folders.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    /// Bare names of regular files, in directory-listing order.
    pub files: Vec<String>,
    /// Names of subdirectories already present at scan time.
    pub folders: HashSet<String>,
}

/// Lists the immediate children of the working directory.
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Scans the working directory once, non-recursively.
    ///
    /// Directories are collected into `folders`; everything else goes
    /// into `files`, except the names in [`RESERVED_FILES`]. The order of
    /// `files` is whatever the underlying listing yields; no sorting is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::ReadDir`] if the directory cannot be
    /// listed or an entry cannot be inspected.
    pub fn scan(dir: &WorkingDirectory) -> OrganizeResult<DirectoryListing> {
        let entries = fs::read_dir(dir.path()).map_err(|e| OrganizeError::ReadDir {
            path: dir.path().to_path_buf(),
            source: e,
        })?;

        let mut listing = DirectoryListing::default();

        for entry in entries {
            let entry = entry.map_err(|e| OrganizeError::ReadDir {
                path: dir.path().to_path_buf(),
                source: e,
            })?;
            let file_type = entry.file_type().map_err(|e| OrganizeError::ReadDir {
                path: entry.path(),
                source: e,
            })?;

            let name = entry.file_name().to_string_lossy().to_string();
            if file_type.is_dir() {
                listing.folders.insert(name);
            } else if !RESERVED_FILES.contains(&name.as_str()) {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }
}
