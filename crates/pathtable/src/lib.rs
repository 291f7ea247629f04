//! Ingest a stream of NUL-delimited paths (as produced by `find -print0`) into
//! a sorted, index-addressable table.
//!
//! The pipeline runs once per ingestion, synchronously:
//!
//! 1. [`read_all`] drains a [`std::io::Read`] source into a [`StreamBuffer`],
//!    growing it on demand and guaranteeing a trailing delimiter.
//! 2. [`extract`] splits the buffer into owned [`FilenameRecord`]s, computing
//!    each record's [`directory_length`](FilenameRecord::directory_length) in
//!    the same pass.
//! 3. Records accumulate in a [`RecordStore`] with geometric growth.
//! 4. [`sort`] orders the store bytewise by full path.
//!
//! [`ingest`] runs all four steps and returns a [`PathTable`]; [`Session`]
//! keeps a table and replaces it on re-ingestion.
//!
//! Allocation failure while growing the buffer or the store aborts the
//! process. Read errors other than interruptions end the stream early and
//! the records received so far are kept.

mod error;
mod extract;
mod growth;
mod options;
mod reader;
mod record;
mod sort;
mod store;
mod table;


pub use error::ReadError;
pub use extract::{extract, extract_into, extract_with};
pub use options::{
    DIRECTORY_SEPARATOR, INIT_BUFFER_SIZE, IngestOptions, MIN_BUFFER_FREE, RECORD_DELIMITER,
};
pub use reader::{ReadStats, StreamBuffer, read_all, read_all_with};
pub use record::{FilenameRecord, directory_length};
pub use sort::{compare_paths, sort};
pub use store::{INITIAL_RECORD_CAPACITY, RecordStore};
pub use table::{PathTable, Session, ingest, ingest_with};
