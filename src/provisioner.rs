//! Idempotent creation of the target subdirectories.

use crate::classifier::FileEntry;
use crate::error::{OrganizeError, OrganizeResult};
use crate::work_dir::WorkingDirectory;
use std::collections::HashSet;
use std::fs;

/// Ensures every target folder required by the files exists.
pub struct FolderProvisioner;

impl FolderProvisioner {
    /// Creates each distinct target folder that is not already known.
    ///
    /// Takes the set of known folder names by value and returns the
    /// updated set, so call sites cannot diverge on whether updates are
    /// visible. Names already in the set are skipped without touching the
    /// filesystem, which makes a second pass over the same entries a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::CreateDir`] on the first creation failure
    /// (permission denied, or a file occupying the folder name).
    /// Folders created before the failure are left in place.
    pub fn ensure(
        entries: &[FileEntry],
        mut known: HashSet<String>,
        dir: &WorkingDirectory,
    ) -> OrganizeResult<HashSet<String>> {
        for entry in entries {
            if known.contains(&entry.target_folder) {
                continue;
            }

            let folder_path = dir.join(&entry.target_folder);
            fs::create_dir(&folder_path).map_err(|e| OrganizeError::CreateDir {
                path: folder_path.clone(),
                source: e,
            })?;
            known.insert(entry.target_folder.clone());
        }

        Ok(known)
    }
}
