//! Integration tests for artifact writing.

use std::fs;

use tempfile::TempDir;

use prism_bundler::Error;
use prism_bundler::output::writer::{copy_file, ensure_output_dir, output_path, write_atomic};

#[test]
fn write_overwrites_existing_artifact() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("modal.js");
    fs::write(&target, "old").unwrap();

    write_atomic(&target, b"new").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "new");
}

#[test]
fn write_into_missing_directory_fails_with_io_error() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("missing").join("modal.js");

    let err = write_atomic(&target, b"code").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!temp.path().join("missing").exists());
}

#[test]
fn copy_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("style.css");
    let dest = temp.path().join("modal.css");
    let content = b".a{color:red}\r\n\xef\xbb\xbf";
    fs::write(&src, content).unwrap();

    let bytes = copy_file(&src, &dest).unwrap();

    assert_eq!(bytes, content.len() as u64);
    assert_eq!(fs::read(&dest).unwrap(), content);
}

#[test]
fn copy_missing_source_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = copy_file(&temp.path().join("nope.css"), &temp.path().join("out.css")).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn ensure_output_dir_creates_nested_directories() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("a").join("b").join("dist");

    ensure_output_dir(&out).unwrap();

    assert!(out.is_dir());
}

#[test]
fn output_path_stays_inside_directory() {
    let temp = TempDir::new().unwrap();
    let path = output_path(temp.path(), "modal.esm.js").unwrap();
    assert_eq!(path.parent().unwrap(), temp.path());

    let err = output_path(temp.path(), "../modal.esm.js").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}
