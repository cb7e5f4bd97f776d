//! Copy-then-delete movement of files into their target folders.
//!
//! A move here is not an atomic rename: the destination folder may have
//! been created moments earlier in the same run, so each file is copied
//! byte-for-byte and the source removed afterwards.

use crate::classifier::FileEntry;
use crate::error::{OrganizeError, OrganizeResult};
use crate::work_dir::WorkingDirectory;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Size of the intermediate copy buffer. A performance knob, not a
/// correctness constraint.
pub const COPY_BUFFER_SIZE: usize = 512 * 1024;

/// Moves files into their target folders, one at a time.
pub struct FileMover;

impl FileMover {
    /// Moves every entry, strictly in sequence.
    ///
    /// Stops at the first failure; entries moved before it stay moved.
    pub fn move_all(entries: &[FileEntry], dir: &WorkingDirectory) -> OrganizeResult<()> {
        for entry in entries {
            Self::move_file(entry, dir)?;
        }
        Ok(())
    }

    /// Copies one file into its target folder, then removes the source.
    ///
    /// If the copy succeeds but the removal fails, the file is left
    /// present in **both** locations and [`OrganizeError::DeleteFile`] is
    /// returned; this inconsistency is accepted and never corrected
    /// automatically.
    pub fn move_file(entry: &FileEntry, dir: &WorkingDirectory) -> OrganizeResult<()> {
        let source_path = dir.join(&entry.filename);
        let destination_path = dir.join(&entry.target_folder).join(&entry.filename);

        Self::copy_file(&source_path, &destination_path)?;

        fs::remove_file(&source_path).map_err(|e| OrganizeError::DeleteFile {
            path: source_path,
            source: e,
        })
    }

    /// Streams the source file's bytes into the destination.
    ///
    /// The buffer is owned by this one copy operation; both handles are
    /// dropped on every exit path.
    fn copy_file(source_path: &Path, destination_path: &Path) -> OrganizeResult<()> {
        let mut source = File::open(source_path).map_err(|e| OrganizeError::OpenFile {
            path: source_path.to_path_buf(),
            source: e,
        })?;
        let mut destination =
            File::create(destination_path).map_err(|e| OrganizeError::CreateFile {
                path: destination_path.to_path_buf(),
                source: e,
            })?;

        let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
        loop {
            let n = source.read(&mut buffer).map_err(|e| OrganizeError::ReadFile {
                path: source_path.to_path_buf(),
                source: e,
            })?;
            if n == 0 {
                return Ok(());
            }
            destination
                .write_all(&buffer[..n])
                .map_err(|e| OrganizeError::WriteFile {
                    path: destination_path.to_path_buf(),
                    source: e,
                })?;
        }
    }
}
