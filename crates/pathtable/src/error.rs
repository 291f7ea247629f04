use std::io;

use thiserror::Error;

/// A non-transient I/O failure that ended ingestion early.
///
/// The reader does not propagate this error: everything captured before the
/// failure is still extracted and sorted. It is kept on the
/// [`StreamBuffer`](crate::StreamBuffer) so callers can tell that the table
/// may be incomplete.
#[derive(Error, Debug)]
#[error("read failed after {captured} bytes: {source}")]
pub struct ReadError {
    /// Bytes received before the failing read.
    pub captured: usize,
    #[source]
    source: io::Error,
}

impl ReadError {
    pub(crate) fn new(captured: usize, source: io::Error) -> Self {
        Self { captured, source }
    }

    /// Kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
