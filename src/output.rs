//! Report formatting for projdoc snapshots.
//!
//! The report is plain text: a "Tree Structure" section holding the rendered
//! tree, then a "File Contents" section with one headed block per file. File
//! content is written byte for byte.

use crate::types::{FileContent, FileEntry, Snapshot};
use crate::ProjdocError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Text written in place of content that could not be read as UTF-8.
pub const PLACEHOLDER: &str = "[Binary or unreadable file]";

const SECTION_RULE: &str = "==============";

/// Formats the snapshot into the full report text.
pub fn format_report(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("Tree Structure:\n");
    out.push_str(SECTION_RULE);
    out.push_str("\n\n");
    out.push_str(&snapshot.tree);

    out.push_str("\n\nFile Contents:\n");
    out.push_str(SECTION_RULE);
    out.push_str("\n\n");

    for file in &snapshot.files {
        push_file_block(&mut out, file);
    }
    out
}

/// Writes the report to any writer.
pub fn write_report<W: Write>(snapshot: &Snapshot, mut writer: W) -> io::Result<()> {
    writer.write_all(format_report(snapshot).as_bytes())?;
    writer.flush()
}

/// Writes the report to a file, creating or truncating it.
pub fn write_report_to_file(
    snapshot: &Snapshot,
    path: impl AsRef<Path>,
) -> Result<(), ProjdocError> {
    let path = path.as_ref();
    create_and_write(snapshot, path).map_err(|e| ProjdocError::io(path, e))
}

// ----------------------- Internal formatting -----------------------

fn push_file_block(out: &mut String, file: &FileEntry) {
    let header = file.display_path();
    out.push_str("\nFile: ");
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"=".repeat(header.chars().count() + 6));
    out.push('\n');
    match &file.content {
        FileContent::Text(text) => {
            out.push('\n');
            out.push_str(text);
            out.push_str("\n\n");
        }
        FileContent::Unreadable(_) => {
            out.push_str(PLACEHOLDER);
            out.push_str("\n\n");
        }
    }
}

fn create_and_write(snapshot: &Snapshot, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_report(snapshot, BufWriter::new(file))
}
