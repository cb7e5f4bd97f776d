//! Working directory resolution from command-line arguments.

use crate::error::{OrganizeError, OrganizeResult};
use std::fs;
use std::path::{Path, PathBuf};

/// The single directory one run operates on.
///
/// Validated once at startup and immutable afterwards; every path the
/// pipeline touches is built by joining a bare name onto it.
#[derive(Debug, Clone)]
pub struct WorkingDirectory {
    path: PathBuf,
}

impl WorkingDirectory {
    /// Returns the underlying directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the path of a direct child of the working directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }
}

impl std::fmt::Display for WorkingDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Resolves the working directory from the positional arguments.
pub struct PathResolver;

impl PathResolver {
    /// Determines the working directory for this run.
    ///
    /// Zero arguments select the current directory. One argument must
    /// name an existing directory. Anything else is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use exttidy::work_dir::PathResolver;
    ///
    /// let dir = PathResolver::resolve(&[]).unwrap();
    /// assert_eq!(dir.path(), std::path::Path::new("."));
    /// ```
    pub fn resolve(args: &[String]) -> OrganizeResult<WorkingDirectory> {
        match args {
            [] => Ok(WorkingDirectory {
                path: PathBuf::from("."),
            }),
            [dir] => {
                let path = PathBuf::from(dir);
                let metadata = fs::metadata(&path).map_err(|_| OrganizeError::NotADirectory {
                    path: path.clone(),
                })?;
                if metadata.is_dir() {
                    Ok(WorkingDirectory { path })
                } else {
                    Err(OrganizeError::NotADirectory { path })
                }
            }
            _ => Err(OrganizeError::InvalidInput { given: args.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_no_args_is_current_directory() {
        let dir = PathResolver::resolve(&[]).expect("Resolve failed");
        assert_eq!(dir.path(), Path::new("."));
    }

    #[test]
    fn test_resolve_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let arg = temp_dir.path().to_string_lossy().to_string();

        let dir = PathResolver::resolve(&[arg]).expect("Resolve failed");
        assert_eq!(dir.path(), temp_dir.path());
    }

    #[test]
    fn test_resolve_missing_path() {
        let result = PathResolver::resolve(&["/no/such/directory".to_string()]);
        assert!(matches!(result, Err(OrganizeError::NotADirectory { .. })));
    }

    #[test]
    fn test_resolve_file_is_not_a_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, "content").expect("Failed to write file");

        let arg = file_path.to_string_lossy().to_string();
        let result = PathResolver::resolve(&[arg]);
        assert!(matches!(result, Err(OrganizeError::NotADirectory { .. })));
    }

    #[test]
    fn test_resolve_too_many_args() {
        let args = vec!["one".to_string(), "two".to_string()];
        let result = PathResolver::resolve(&args);
        assert!(matches!(
            result,
            Err(OrganizeError::InvalidInput { given: 2 })
        ));
    }

    #[test]
    fn test_join_builds_child_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let arg = temp_dir.path().to_string_lossy().to_string();
        let dir = PathResolver::resolve(&[arg]).expect("Resolve failed");

        assert_eq!(dir.join("child.txt"), temp_dir.path().join("child.txt"));
    }
}
