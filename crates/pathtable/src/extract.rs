//! Record extraction: one left-to-right pass over the ingested bytes.

use bstr::BString;
use tracing::debug;

use crate::{
    options::{DIRECTORY_SEPARATOR, IngestOptions, RECORD_DELIMITER},
    reader::StreamBuffer,
    record::FilenameRecord,
    store::RecordStore,
};

/// Split a [`StreamBuffer`] into records using the default options.
#[must_use]
pub fn extract(buffer: &StreamBuffer) -> RecordStore {
    extract_with(buffer, &IngestOptions::default())
}

/// Split a [`StreamBuffer`] into records.
#[must_use]
pub fn extract_with(buffer: &StreamBuffer, options: &IngestOptions) -> RecordStore {
    let mut store = RecordStore::new();
    extract_into(buffer.as_bytes(), options, &mut store);
    debug!(records = store.len(), "extracted records");
    store
}

/// Split delimited bytes into records, appending them to `store`.
///
/// Each record's path is copied out of `bytes`. Its directory length is
/// tracked in the same scan that finds the delimiter, so every byte is visited
/// once. Adjacent delimiters yield an empty record unless
/// [`IngestOptions::skip_empty_records`] is set. A trailing record without a
/// delimiter is emitted as if it were terminated.
pub fn extract_into(bytes: &[u8], options: &IngestOptions, store: &mut RecordStore) {
    let mut start = 0;
    let mut directory_length = 0;

    for (idx, &byte) in bytes.iter().enumerate() {
        if byte == RECORD_DELIMITER {
            emit(&bytes[start..idx], directory_length, options, store);
            start = idx + 1;
            directory_length = 0;
        } else if byte == DIRECTORY_SEPARATOR {
            directory_length = idx + 1 - start;
        }
    }

    if start < bytes.len() {
        emit(&bytes[start..], directory_length, options, store);
    }
}

fn emit(path: &[u8], directory_length: usize, options: &IngestOptions, store: &mut RecordStore) {
    if path.is_empty() && options.skip_empty_records {
        return;
    }
    store.append(FilenameRecord::from_parts(
        BString::from(path),
        directory_length,
    ));
}
