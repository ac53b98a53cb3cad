use std::fs;
use std::path::{Path, PathBuf};

use svegeo_ingest::{IngestError, RawFile, parse_csv_table, read_raw_file};

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("svegeo_ingest_table_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &Path) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

#[test]
fn reads_header_and_rows() {
    let path = temp_file(
        "counties.csv",
        b"county_code,county_name,county_name_short\n01,Stockholm,Sthlm\n03,Uppsala,Upps\n",
    );
    let raw = read_raw_file(&path).expect("read raw");
    let table = parse_csv_table(&raw).expect("parse table");
    assert_eq!(
        table.header,
        vec!["county_code", "county_name", "county_name_short"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["01", "Stockholm", "Sthlm"]);
    assert_eq!(table.column_index("county_name"), Some(1));
    assert_eq!(table.column_index("missing"), None);
    cleanup(&path);
}

#[test]
fn keeps_cells_verbatim() {
    // No trimming, no BOM stripping: the validator wants the file as-is.
    let raw = RawFile::from_bytes(
        PathBuf::from("test.csv"),
        b"\xef\xbb\xbfcode,name\n007, padded \n".to_vec(),
    )
    .expect("decode");
    let table = parse_csv_table(&raw).expect("parse table");
    assert_eq!(table.header[0], "\u{feff}code");
    assert_eq!(table.rows[0], vec!["007", " padded "]);
}

#[test]
fn short_rows_read_missing_cells_as_empty() {
    let raw = RawFile::from_bytes(PathBuf::from("test.csv"), b"a,b,c\n1,2\n".to_vec())
        .expect("decode");
    let table = parse_csv_table(&raw).expect("parse table");
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.value(0, 1), "2");
    assert_eq!(table.value(0, 2), "");
}

#[test]
fn parses_quoted_fields() {
    let raw = RawFile::from_bytes(
        PathBuf::from("test.csv"),
        b"code,name\n01,\"Name, with comma\"\n".to_vec(),
    )
    .expect("decode");
    let table = parse_csv_table(&raw).expect("parse table");
    assert_eq!(table.rows[0], vec!["01", "Name, with comma"]);
}

#[test]
fn empty_file_yields_empty_table() {
    let raw = RawFile::from_bytes(PathBuf::from("test.csv"), Vec::new()).expect("decode");
    let table = parse_csv_table(&raw).expect("parse table");
    assert!(table.header.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn rejects_invalid_utf8() {
    let error = RawFile::from_bytes(PathBuf::from("bad.csv"), vec![b'a', 0xff, b'b'])
        .expect_err("must reject");
    match error {
        IngestError::Utf8 { path, offset } => {
            assert_eq!(path, PathBuf::from("bad.csv"));
            assert_eq!(offset, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let error = read_raw_file(&PathBuf::from("/nonexistent/svegeo/counties.csv"))
        .expect_err("must fail");
    assert!(matches!(error, IngestError::Io { .. }));
}
