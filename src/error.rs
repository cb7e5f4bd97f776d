//! Error taxonomy shared by every pipeline stage.
//!
//! Each variant identifies one failure kind; the wording of the rendered
//! message lives entirely in the `Display` impl, so callers can match on
//! identity without parsing strings.

use std::path::PathBuf;

/// Errors that can occur while organizing a directory.
///
/// Every error is terminal: the first one encountered aborts the run,
/// and files already moved stay in their new location.
#[derive(Debug)]
pub enum OrganizeError {
    /// More than one positional argument was given on the command line.
    InvalidInput {
        /// Number of positional arguments received.
        given: usize,
    },
    /// The given path does not exist or is not a directory.
    NotADirectory { path: PathBuf },
    /// The working directory could not be listed.
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A target subdirectory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A source file could not be opened for copying.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A destination file could not be created.
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading from a source file failed mid-copy.
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing to a destination file failed mid-copy.
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A source file could not be removed after a successful copy.
    /// The file now exists in both locations.
    DeleteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { given } => {
                write!(
                    f,
                    "Invalid input: expected at most one directory argument, got {}",
                    given
                )
            }
            Self::NotADirectory { path } => {
                write!(f, "Not an existing directory: {}", path.display())
            }
            Self::ReadDir { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::CreateDir { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::OpenFile { path, source } => {
                write!(f, "Cannot open file {}: {}", path.display(), source)
            }
            Self::CreateFile { path, source } => {
                write!(f, "Cannot create file {}: {}", path.display(), source)
            }
            Self::ReadFile { path, source } => {
                write!(f, "Failed to read from {}: {}", path.display(), source)
            }
            Self::WriteFile { path, source } => {
                write!(f, "Failed to write to {}: {}", path.display(), source)
            }
            Self::DeleteFile { path, source } => {
                write!(
                    f,
                    "Could not delete {} after copying it: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput { .. } | Self::NotADirectory { .. } => None,
            Self::ReadDir { source, .. }
            | Self::CreateDir { source, .. }
            | Self::OpenFile { source, .. }
            | Self::CreateFile { source, .. }
            | Self::ReadFile { source, .. }
            | Self::WriteFile { source, .. }
            | Self::DeleteFile { source, .. } => Some(source),
        }
    }
}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = OrganizeError::InvalidInput { given: 3 };
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn test_display_carries_path() {
        let err = OrganizeError::NotADirectory {
            path: PathBuf::from("/no/such/place"),
        };
        assert!(err.to_string().contains("/no/such/place"));
    }

    #[test]
    fn test_io_variants_expose_source() {
        use std::error::Error;
        let err = OrganizeError::OpenFile {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
