/// Extension-based classification of filenames into target folder names.
///
/// The rule is intentionally leftmost-dot: everything after the first `.`
/// counts as the extension, so `archive.tar.gz` lands in `tar.gz_folder`
/// rather than `gz_folder`, and a dotfile like `.gitignore` lands in
/// `gitignore_folder`.

/// Folder that collects files whose name contains no dot at all.
pub const EMPTY_EXTENSION_FOLDER: &str = "for_empty_extension_folder";

/// Suffix appended to every derived extension to form a folder name.
pub const FOLDER_SUFFIX: &str = "_folder";

/// A top-level file paired with the folder it classifies into.
///
/// `target_folder` is derived exactly once, when the entry is built, and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Bare name of the file, no path separators.
    pub filename: String,
    /// Name of the subdirectory this file belongs in.
    pub target_folder: String,
}

/// Derives target folder names from filenames.
pub struct ExtensionClassifier;

impl ExtensionClassifier {
    /// Returns the target folder name for a filename.
    ///
    /// Pure and total: every input maps to some folder name.
    ///
    /// # Examples
    ///
    /// ```
    /// use exttidy::classifier::ExtensionClassifier;
    ///
    /// assert_eq!(ExtensionClassifier::classify("notes.txt"), "txt_folder");
    /// assert_eq!(ExtensionClassifier::classify("archive.tar.gz"), "tar.gz_folder");
    /// assert_eq!(ExtensionClassifier::classify("Makefile"), "for_empty_extension_folder");
    /// ```
    pub fn classify(filename: &str) -> String {
        match filename.find('.') {
            Some(dot_index) => format!("{}{}", &filename[dot_index + 1..], FOLDER_SUFFIX),
            None => EMPTY_EXTENSION_FOLDER.to_string(),
        }
    }

    /// Classifies a batch of filenames, preserving their listing order.
    pub fn classify_all(filenames: Vec<String>) -> Vec<FileEntry> {
        filenames
            .into_iter()
            .map(|filename| {
                let target_folder = Self::classify(&filename);
                FileEntry {
                    filename,
                    target_folder,
                }
            })
            .collect()
    }
}
