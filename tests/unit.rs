use projdoc::{
    collect_files,
    generate_tree,
    output,
    projdoc,
    BinaryDetection,
    FileContent,
    ProjdocBuilder,
    ProjdocError,
    Unreadable,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_tree_glyphs_nested() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/y")).unwrap();
    fs::write(dir.path().join("a/x.txt"), "x").unwrap();
    fs::write(dir.path().join("a/y/z.txt"), "z").unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let tree = generate_tree(&options).unwrap();
    assert_eq!(
        tree,
        "├── a/\n│   ├── x.txt\n│   └── y/\n│       └── z.txt\n└── b.txt\n"
    );
}
#[test]
fn test_last_sibling_ignores_filtered_entries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden"), "h").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("z.md"), "z").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    assert_eq!(generate_tree(&options).unwrap(), "└── a.txt\n");
}
#[test]
fn test_hidden_directory_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".cache/deep")).unwrap();
    fs::write(dir.path().join(".cache/deep/data.txt"), "secret").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let tree = generate_tree(&options).unwrap();
    assert!(!tree.contains("cache"));
    assert!(!tree.contains("data.txt"));
    let files = collect_files(&options).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].display_path(), "main.rs");
}
#[test]
fn test_excluded_suffixes() {
    let dir = tempdir().unwrap();
    for name in ["m.pyc", "lib.so", "app.exe", "style.css", "README.md", "odd.git"] {
        fs::write(dir.path().join(name), "x").unwrap();
    }
    fs::write(dir.path().join("keep.py"), "pass").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let files = collect_files(&options).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].display_path(), "keep.py");
}
#[test]
fn test_directories_not_matched_by_suffix() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("__pycache__")).unwrap();
    fs::write(dir.path().join("__pycache__/mod.pyc"), "x").unwrap();
    fs::write(dir.path().join("__pycache__/notes.txt"), "kept").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let result = projdoc(options).unwrap();
    assert_eq!(result.tree, "└── __pycache__/\n    └── notes.txt\n");
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].display_path(), "__pycache__/notes.txt");
}
#[test]
fn test_invalid_utf8_becomes_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
    fs::write(dir.path().join("ok.txt"), "fine").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let result = projdoc(options).unwrap();
    assert_eq!(result.files.len(), 2);
    assert_eq!(
        result.files[0].content,
        FileContent::Unreadable(Unreadable::InvalidUtf8)
    );
    assert_eq!(result.files[1].content.as_text(), Some("fine"));
    let report = output::format_report(&result);
    assert!(report.contains("\nFile: blob.bin\n==============\n[Binary or unreadable file]\n\n"));
    assert!(report.contains("\nFile: ok.txt\n============\n\nfine\n\n"));
}
#[test]
fn test_binary_detection_simple() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nul.dat"), b"ab\0cd").unwrap();
    let plain = collect_files(&ProjdocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(plain[0].content.as_text(), Some("ab\0cd"));
    let options = ProjdocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Simple)
        .build();
    let files = collect_files(&options).unwrap();
    assert_eq!(files[0].content, FileContent::Unreadable(Unreadable::Binary));
}
#[test]
fn test_output_file_excluded() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("report.txt");
    fs::write(&report, "stale report").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let options = ProjdocBuilder::new(dir.path()).output_file(&report).build();
    let result = projdoc(options).unwrap();
    assert_eq!(result.tree, "└── a.txt\n");
    assert_eq!(result.files.len(), 1);
}
#[test]
fn test_missing_root_is_io_error() {
    let dir = tempdir().unwrap();
    let options = ProjdocBuilder::new(dir.path().join("nope")).build();
    assert!(matches!(projdoc(options), Err(ProjdocError::Io { .. })));
}
#[test]
fn test_file_root_is_invalid_path() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    let options = ProjdocBuilder::new(&file).build();
    assert!(matches!(projdoc(options), Err(ProjdocError::InvalidPath(_))));
}
#[cfg(unix)]
#[test]
fn test_dangling_symlink_becomes_placeholder() {
    let dir = tempdir().unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("link.txt")).unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    let options = ProjdocBuilder::new(dir.path()).build();
    let result = projdoc(options).unwrap();
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].display_path(), "link.txt");
    assert_eq!(
        result.files[0].content,
        FileContent::Unreadable(Unreadable::Io(std::io::ErrorKind::NotFound))
    );
    assert_eq!(result.files[1].content.as_text(), Some("z"));
    let report = output::format_report(&result);
    assert!(report.contains("\nFile: link.txt\n==============\n[Binary or unreadable file]\n\n"));
    assert!(report.contains("\nFile: z.txt\n===========\n\nz\n\n"));
}
#[test]
fn test_binary_detection_accurate() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("image.bin"), [0x89, b'P', b'N', b'G', 0x00, 0x00, 0x0d]).unwrap();
    fs::write(dir.path().join("plain.txt"), "just text\n").unwrap();
    let options = ProjdocBuilder::new(dir.path())
        .binary_detection(BinaryDetection::Accurate)
        .build();
    let files = collect_files(&options).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].content, FileContent::Unreadable(Unreadable::Binary));
    assert_eq!(files[1].content.as_text(), Some("just text\n"));
}
#[test]
fn test_same_named_file_in_subdirectory_kept() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("report.txt");
    fs::write(&report, "stale report").unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/report.txt"), "nested").unwrap();
    let options = ProjdocBuilder::new(dir.path()).output_file(&report).build();
    let result = projdoc(options).unwrap();
    assert_eq!(result.tree, "└── docs/\n    └── report.txt\n");
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].display_path(), "docs/report.txt");
    assert_eq!(result.files[0].content.as_text(), Some("nested"));
}
#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_listed_and_skipped() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("inner.txt"), "inner").unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not stop a privileged user.
    let readable = fs::read_dir(&locked).is_ok();
    let result = projdoc(ProjdocBuilder::new(dir.path()).build());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }
    let result = result.unwrap();
    assert_eq!(result.tree, "├── locked/\n└── z.txt\n");
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].display_path(), "z.txt");
}
