//! The sorted table handed to the presentation layer, and the session that
//! owns it across re-ingestions.

use core::{ops::Index, slice};
use std::io::Read;

use tracing::debug;

use crate::{
    error::ReadError,
    extract::extract_with,
    options::IngestOptions,
    reader::{ReadStats, read_all_with},
    record::FilenameRecord,
    sort::sort,
    store::RecordStore,
};

/// Read, extract and sort `source` using the default [`IngestOptions`].
///
/// ```rust
/// let table = pathtable::ingest(&b"src/main.rs\0Cargo.toml\0src/lib.rs"[..]);
/// assert_eq!(table.record_count(), 3);
/// assert_eq!(table.record_at(0).unwrap().path(), "Cargo.toml");
/// assert_eq!(table.record_at(2).unwrap().directory_length(), 4);
/// ```
pub fn ingest<R: Read>(source: R) -> PathTable {
    ingest_with(source, &IngestOptions::default())
}

/// Read, extract and sort `source`.
///
/// This runs to completion on the calling thread. Read errors other than
/// interruptions end the stream early without failing; see
/// [`PathTable::read_error`].
///
/// # Aborts
///
/// Aborts the process if the buffer or the record store cannot be grown.
pub fn ingest_with<R: Read>(source: R, options: &IngestOptions) -> PathTable {
    let mut buffer = read_all_with(source, options);
    let mut records = extract_with(&buffer, options);
    sort(&mut records);
    debug!(records = records.len(), bytes = buffer.len(), "ingestion complete");

    PathTable {
        records,
        stats: buffer.stats(),
        read_error: buffer.take_read_error(),
    }
}

/// A sorted, read-only table of path records.
#[derive(Debug, Default)]
pub struct PathTable {
    records: RecordStore,
    stats: ReadStats,
    read_error: Option<ReadError>,
}

impl PathTable {
    /// Number of records in the table.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, valid for `index < record_count()`.
    #[must_use]
    pub fn record_at(&self, index: usize) -> Option<&FilenameRecord> {
        self.records.get(index)
    }

    /// Iterate over records in sorted order.
    pub fn iter(&self) -> slice::Iter<'_, FilenameRecord> {
        self.records.iter()
    }

    /// The underlying record store.
    #[must_use]
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// How the source was read.
    #[must_use]
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// The read error that cut ingestion short, if any.
    ///
    /// The table still holds every record received before the failure. Which
    /// records are missing is unknown.
    #[must_use]
    pub fn read_error(&self) -> Option<&ReadError> {
        self.read_error.as_ref()
    }
}

impl Index<usize> for PathTable {
    type Output = FilenameRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a PathTable {
    type Item = &'a FilenameRecord;
    type IntoIter = slice::Iter<'a, FilenameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owns the current [`PathTable`] and rebuilds it on request.
///
/// A new table replaces the current one only once it has been read,
/// extracted and sorted in full.
#[derive(Debug, Default)]
pub struct Session {
    options: IngestOptions,
    table: PathTable,
    ingestions: usize,
}

impl Session {
    /// A session with an empty table.
    #[must_use]
    pub fn new(options: IngestOptions) -> Self {
        Self {
            options,
            table: PathTable::default(),
            ingestions: 0,
        }
    }

    /// Options used for every ingestion in this session.
    #[must_use]
    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Ingest `source`, replacing the current table with the result.
    ///
    /// The old table is dropped only after the new one is fully built. A
    /// source that fails part way still produces a table (possibly empty)
    /// from the bytes received, and that table replaces the current one; its
    /// [`PathTable::read_error`] reports the failure.
    pub fn ingest<R: Read>(&mut self, source: R) -> &PathTable {
        let table = ingest_with(source, &self.options);
        self.table = table;
        self.ingestions += 1;
        &self.table
    }

    /// The current table; empty until the first ingestion.
    #[must_use]
    pub fn table(&self) -> &PathTable {
        &self.table
    }

    /// Number of completed ingestions.
    #[must_use]
    pub fn ingestions(&self) -> usize {
        self.ingestions
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::tests::readers::FailingReader;

    #[test]
    fn table_is_sorted_and_addressable() {
        let table = ingest(&b"b/2\0a/1\0c\0"[..]);
        assert_eq!(table.record_count(), 3);
        let paths: Vec<String> = table.iter().map(ToString::to_string).collect();
        assert_eq!(paths, ["a/1", "b/2", "c"]);
        assert_eq!(table[1].directory_length(), 2);
        assert!(table.record_at(3).is_none());
        assert!(table.read_error().is_none());
    }

    #[test]
    fn session_starts_empty() {
        let session = Session::default();
        assert!(session.table().is_empty());
        assert_eq!(session.ingestions(), 0);
    }

    #[test]
    fn session_replaces_table_wholesale() {
        let mut session = Session::new(IngestOptions::default());
        session.ingest(&b"one\0two\0three\0"[..]);
        assert_eq!(session.table().record_count(), 3);

        let table = session.ingest(&b"x/y"[..]);
        assert_eq!(table.record_count(), 1);
        assert_eq!(table[0].path(), "x/y");
        assert_eq!(session.ingestions(), 2);
    }

    #[test]
    fn partial_table_carries_read_error() {
        let table = ingest(FailingReader::new(b"z\0a/b\0m/tr", ErrorKind::Other));
        let paths: Vec<String> = table.iter().map(ToString::to_string).collect();
        assert_eq!(paths, ["a/b", "m/tr", "z"]);
        assert_eq!(table.read_error().map(ReadError::kind), Some(ErrorKind::Other));
        assert_eq!(table.stats().bytes_read, 10);
    }

    #[test]
    fn failed_reingestion_replaces_table_and_reports_error() {
        let mut session = Session::default();
        session.ingest(&b"a\0b\0"[..]);
        assert_eq!(session.table().record_count(), 2);

        let table = session.ingest(FailingReader::new(b"", ErrorKind::BrokenPipe));
        assert!(table.is_empty());
        assert_eq!(table.read_error().map(ReadError::kind), Some(ErrorKind::BrokenPipe));
        assert_eq!(session.ingestions(), 2);
    }

    #[test]
    fn session_uses_its_options() {
        let mut session = Session::new(IngestOptions {
            skip_empty_records: true,
            ..Default::default()
        });
        let table = session.ingest(&b"\0\0a\0\0"[..]);
        assert_eq!(table.record_count(), 1);
        assert!(session.options().skip_empty_records);
    }
}
