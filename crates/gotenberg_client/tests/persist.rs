use std::fs;

use gotenberg_client::{
    ensure_output_dir, read_asset, Asset, AssetWriter, ClientError, PersistError,
};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn output_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("taken");
    fs::write(&file_path, "x").unwrap();

    let err = ensure_output_dir(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::OutputDir(_)));
    assert_eq!(fs::read(&file_path).unwrap(), b"x");
}

#[test]
fn atomic_write_replaces_existing_asset() {
    let temp = TempDir::new().unwrap();
    let writer = AssetWriter::new(temp.path().to_path_buf());

    let first = writer.write(&Asset::new("output.pdf", "%PDF-1")).unwrap();
    assert_eq!(first.file_name().unwrap(), "output.pdf");
    assert_eq!(fs::read(&first).unwrap(), b"%PDF-1");

    let second = writer.write(&Asset::new("output.pdf", "%PDF-2")).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"%PDF-2");
}

#[test]
fn archive_entry_paths_stay_inside_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let writer = AssetWriter::new(out.clone());

    let paths = writer
        .write_all(&[
            Asset::new("../escape.pdf", "%PDF-a"),
            Asset::new("nested/b.pdf", "%PDF-b"),
        ])
        .unwrap();

    assert_eq!(paths, vec![out.join("escape.pdf"), out.join("b.pdf")]);
    assert!(!temp.path().join("escape.pdf").exists());
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AssetWriter::new(file_path.clone());
    let result = writer.write(&Asset::new("doc.pdf", "data"));
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.pdf").exists());
}

#[tokio::test]
async fn read_asset_defaults_to_file_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("example.docx");
    fs::write(&path, b"PK\x03\x04").unwrap();

    let asset = read_asset(&path, None).await.unwrap();
    assert_eq!(asset.filename, "example.docx");
    assert_eq!(&asset.content[..], b"PK\x03\x04");

    let renamed = read_asset(&path, Some("file1.docx")).await.unwrap();
    assert_eq!(renamed.filename, "file1.docx");
}

#[tokio::test]
async fn read_asset_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.docx");

    let err = read_asset(&missing, None).await.unwrap_err();
    match err {
        ClientError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error {other:?}"),
    }
}
