use crate::error::ProjdocError;
use crate::options::{BinaryDetection, ProjdocOptions};
use crate::output::write_report_to_file;
use crate::tree::build_tree_from_entries;
use crate::types::{FileContent, FileEntry, Snapshot, Unreadable};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// File name suffixes that are never included in the report.
///
/// Only non-directory entries are matched, so `.git`, `.idea` and `__pycache__`
/// only catch files that happen to carry those names.
pub const EXCLUDED_SUFFIXES: &[&str] = &[
    ".pyc",
    ".pyo",
    ".pyd",
    ".so",
    ".dll",
    ".exe",
    ".git",
    ".idea",
    "__pycache__",
    ".css",
    ".md",
];

const BINARY_SNIFF_LEN: usize = 4096;

/// An entry below the root that survived every exclusion rule.
#[derive(Debug)]
pub(crate) struct WalkedEntry {
    pub(crate) path: PathBuf,
    pub(crate) relative: PathBuf,
    pub(crate) is_dir: bool,
}

struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}
impl Walker {
    fn new(options: &ProjdocOptions) -> Result<Self, ProjdocError> {
        let root = &options.root;
        let metadata = fs::metadata(root).map_err(|e| ProjdocError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(ProjdocError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        // The walker swallows a failing root into its error stream; open it here
        // so that failure reaches the caller.
        fs::read_dir(root).map_err(|e| ProjdocError::io(root, e))?;

        let excluded_output = resolve_output(&options.output_file);
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_excluded(entry, excluded_output.as_deref()));
        Ok(Self {
            inner: builder.build(),
            root: root.clone(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = WalkedEntry> {
        let root = self.root;
        self.inner.filter_map(move |result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => {
                let is_dir = is_directory(&entry);
                let path = entry.into_path();
                let relative = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();
                Some(WalkedEntry {
                    path,
                    relative,
                    is_dir,
                })
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
    }
    fn collect_entries(self) -> Vec<WalkedEntry> {
        self.into_iter().collect()
    }
}

/// Symlinks are not followed, but a link to a directory is still shown as one.
fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(file_type) if file_type.is_symlink() => entry.path().is_dir(),
        Some(file_type) => file_type.is_dir(),
        None => false,
    }
}

fn is_excluded(entry: &DirEntry, output: Option<&Path>) -> bool {
    if is_directory(entry) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        tracing::debug!("Excluded by suffix: {}", entry.path().display());
        return true;
    }
    match output {
        Some(output) if output.file_name() == Some(entry.file_name()) => {
            fs::canonicalize(entry.path()).is_ok_and(|path| path.as_path() == output)
        }
        _ => false,
    }
}

/// Absolute form of the output path. The file itself may not exist yet, so only
/// its parent directory is canonicalized.
fn resolve_output(path: &Path) -> Option<PathBuf> {
    if let Ok(path) = fs::canonicalize(path) {
        return Some(path);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

fn read_file_content(path: &Path, binary_detection: BinaryDetection) -> FileContent {
    let mut bytes = Vec::new();
    let read = File::open(path).and_then(|mut file| file.read_to_end(&mut bytes));
    if let Err(e) = read {
        tracing::debug!("Unreadable file {}: {}", path.display(), e);
        return FileContent::Unreadable(Unreadable::Io(e.kind()));
    }
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        tracing::debug!("Binary file detected: {}", path.display());
        return FileContent::Unreadable(Unreadable::Binary);
    }
    match String::from_utf8(bytes) {
        Ok(text) => FileContent::Text(text),
        Err(_) => {
            tracing::debug!("File is not valid UTF-8: {}", path.display());
            FileContent::Unreadable(Unreadable::InvalidUtf8)
        }
    }
}

fn process_files(entries: Vec<WalkedEntry>, options: &ProjdocOptions) -> Vec<FileEntry> {
    entries
        .into_iter()
        .filter(|entry| !entry.is_dir)
        .map(|entry| FileEntry {
            content: read_file_content(&entry.path, options.binary_detection),
            path: entry.path,
            relative: entry.relative,
        })
        .collect()
}

/// Renders the directory tree under `options.root`.
pub fn generate_tree(options: &ProjdocOptions) -> Result<String, ProjdocError> {
    let entries = Walker::new(options)?.collect_entries();
    Ok(build_tree_from_entries(&entries))
}

/// Reads every included file under `options.root`, in traversal order.
///
/// Files that cannot be read as text come back as [`FileContent::Unreadable`];
/// only a bad root is an error.
pub fn collect_files(options: &ProjdocOptions) -> Result<Vec<FileEntry>, ProjdocError> {
    let entries = Walker::new(options)?.collect_entries();
    Ok(process_files(entries, options))
}

/// Walks the root once and produces both the tree and the file contents.
pub fn projdoc(options: ProjdocOptions) -> Result<Snapshot, ProjdocError> {
    tracing::debug!("Starting projdoc with root: {}", options.root.display());
    let entries = Walker::new(&options)?.collect_entries();
    let tree = build_tree_from_entries(&entries);
    let files = process_files(entries, &options);
    Ok(Snapshot { tree, files })
}

/// Takes a snapshot and writes the report to the configured output file.
pub fn generate_documentation(options: ProjdocOptions) -> Result<Snapshot, ProjdocError> {
    let output = options.output_file.clone();
    let snapshot = projdoc(options)?;
    write_report_to_file(&snapshot, &output)?;
    Ok(snapshot)
}
