#![allow(missing_docs)]

use pathtable::{FilenameRecord, ingest};
use serde_json::json;

#[test]
fn record_serializes_path_and_directory_length() {
    let record = FilenameRecord::new("usr/bin/env");
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "path": "usr/bin/env", "directory_length": 8 })
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let record = FilenameRecord::new(&b"d/\xfe"[..]);
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({ "path": "d/\u{FFFD}", "directory_length": 2 })
    );
}

#[test]
fn stats_serialize() {
    let table = ingest(&b"a\0b"[..]);
    assert_eq!(
        serde_json::to_value(table.stats()).unwrap(),
        json!({ "bytes_read": 3, "reads": 1, "interrupted": 0, "grows": 0 })
    );
}
