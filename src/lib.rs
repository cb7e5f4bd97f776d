//! exttidy - extension-based directory organization
//!
//! This library provides utilities for resolving a working directory,
//! listing its files, classifying them by extension into target folder
//! names, creating those folders idempotently, and moving each file into
//! its folder via copy-then-delete.

pub mod classifier;
pub mod cli;
pub mod error;
pub mod mover;
pub mod output;
pub mod provisioner;
pub mod scanner;
pub mod work_dir;

pub use classifier::{ExtensionClassifier, FileEntry};
pub use error::{OrganizeError, OrganizeResult};
pub use mover::FileMover;
pub use provisioner::FolderProvisioner;
pub use scanner::{DirectoryListing, DirectoryScanner};
pub use work_dir::{PathResolver, WorkingDirectory};

pub use cli::{Cli, run_cli};
