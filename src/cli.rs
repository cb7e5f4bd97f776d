//! Command-line interface module for exttidy.
//!
//! This module handles all CLI-related functionality including:
//! - Argument declaration and parsing
//! - Pipeline orchestration (resolve, scan, classify, provision, move)
//! - Dry-run reporting

use crate::classifier::{ExtensionClassifier, FileEntry};
use crate::error::OrganizeResult;
use crate::mover::FileMover;
use crate::output::OutputFormatter;
use crate::provisioner::FolderProvisioner;
use crate::scanner::DirectoryScanner;
use crate::work_dir::{PathResolver, WorkingDirectory};
use clap::Parser;
use std::collections::HashMap;

/// Organize a directory's files into extension-named subdirectories.
///
/// Every regular file directly inside the working directory is moved
/// into a subdirectory named after the part of its filename following
/// the first dot (`notes.txt` lands in `txt_folder/`), or into
/// `for_empty_extension_folder/` when the name has no dot.
#[derive(Debug, Parser)]
#[command(name = "exttidy", version)]
pub struct Cli {
    /// Directory to organize. Defaults to the current directory.
    //
    // Every positional is collected; the arg-count rule belongs to
    // PathResolver, which reports two or more as invalid input.
    #[arg(value_name = "PATH")]
    pub path: Vec<String>,

    /// List what would be moved without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Runs the full organization pipeline.
///
/// This is the main entry point for CLI operations. Stages run strictly
/// in sequence and the first error aborts all remaining work; files
/// moved before the failure stay in their new location.
///
/// # Examples
///
/// ```no_run
/// use exttidy::cli::run_cli;
///
/// let result = run_cli(&["/path/to/directory".to_string()], false);
/// match result {
///     Ok(()) => println!("Operation completed successfully"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn run_cli(args: &[String], dry_run: bool) -> OrganizeResult<()> {
    let work_dir = PathResolver::resolve(args)?;
    let listing = DirectoryScanner::scan(&work_dir)?;
    let folders_before = listing.folders.len();
    let entries = ExtensionClassifier::classify_all(listing.files);

    if entries.is_empty() {
        OutputFormatter::info(&format!("No files to organize in {}", work_dir));
        return Ok(());
    }

    if dry_run {
        report_dry_run(&entries, &work_dir);
        return Ok(());
    }

    OutputFormatter::info(&format!("Organizing contents of: {}", work_dir));

    let known_folders = FolderProvisioner::ensure(&entries, listing.folders, &work_dir)?;
    let folders_created = known_folders.len() - folders_before;

    let progress = OutputFormatter::create_progress_bar(entries.len() as u64);
    for entry in &entries {
        progress.set_message(entry.filename.clone());
        if let Err(e) = FileMover::move_file(entry, &work_dir) {
            progress.abandon();
            return Err(e);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    OutputFormatter::summary_table(&folder_counts(&entries), entries.len());
    OutputFormatter::success(&format!(
        "Organized {} {} ({} new {}).",
        entries.len(),
        if entries.len() == 1 { "file" } else { "files" },
        folders_created,
        if folders_created == 1 {
            "folder"
        } else {
            "folders"
        },
    ));

    Ok(())
}

/// Shows what a run would do without performing any filesystem mutation.
fn report_dry_run(entries: &[FileEntry], work_dir: &WorkingDirectory) {
    OutputFormatter::dry_run_notice(&format!("Analyzing contents of: {}", work_dir));

    for entry in entries {
        OutputFormatter::plain(&format!(" - {}", entry.filename));
        OutputFormatter::plain(&format!("   → Would move to {}/", entry.target_folder));
    }

    OutputFormatter::summary_table(&folder_counts(entries), entries.len());
    OutputFormatter::success("Dry run complete. No files were modified.");
}

/// Counts entries per target folder for the summary table.
fn folder_counts(entries: &[FileEntry]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.target_folder.clone()).or_insert(0) += 1;
    }
    counts
}
