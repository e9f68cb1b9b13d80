use std::io;
use std::path::PathBuf;

/// Why a file's content could not be included in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unreadable {
    /// The bytes are not valid UTF-8.
    InvalidUtf8,
    /// Binary detection flagged the file.
    Binary,
    /// Opening or reading the file failed.
    Io(io::ErrorKind),
}

/// The outcome of reading a single file as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Unreadable(Unreadable),
}

impl FileContent {
    /// Returns the text, or `None` if the file was unreadable.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Unreadable(_) => None,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileContent::Unreadable(_))
    }
}

/// A single file entry with its path and content.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The path as produced by the walk (root joined with the relative path).
    pub path: PathBuf,
    /// The path relative to the root.
    pub relative: PathBuf,
    pub content: FileContent,
}

impl FileEntry {
    /// The relative path rendered with `/` separators, as used in report headers.
    pub fn display_path(&self) -> String {
        self.relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// The complete result of a projdoc run, before it is formatted.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// A visual tree representation of the directory structure.
    ///
    /// Every line, including the last, ends with `\n`. Empty for an empty root.
    pub tree: String,
    /// All included files in traversal order.
    pub files: Vec<FileEntry>,
}
