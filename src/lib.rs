//! # Projdoc
//!
//! `projdoc` walks a directory tree and produces a single text report: an ASCII
//! tree of the structure followed by the contents of every included file.
//!
//! Hidden entries (names starting with `.`) are pruned from the walk, files whose
//! names end in one of [`EXCLUDED_SUFFIXES`] are skipped, and so is the report
//! file itself. A file that cannot be read as UTF-8 text is still listed, with
//! [`output::PLACEHOLDER`] in place of its content.
//!
//! # Example
//!
//! ```no_run
//! use projdoc::{ProjdocBuilder, generate_documentation};
//!
//! let options = ProjdocBuilder::new(".")
//!     .output_file("project_documentation.txt")
//!     .build();
//!
//! let snapshot = generate_documentation(options).expect("Failed to document directory");
//! println!("{} files documented", snapshot.files.len());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{EXCLUDED_SUFFIXES, collect_files, generate_documentation, generate_tree, projdoc};
pub use error::ProjdocError;
pub use options::{BinaryDetection, DEFAULT_OUTPUT_FILE, ProjdocBuilder, ProjdocOptions};
pub use types::{FileContent, FileEntry, Snapshot, Unreadable};
