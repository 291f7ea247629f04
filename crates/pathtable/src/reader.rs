//! Stream reader: drains a byte source into one owned buffer.
//!
//! Growth is demand-driven rather than doubling. The buffer starts at
//! [`IngestOptions::initial_buffer_size`] and, whenever a read leaves less than
//! [`IngestOptions::min_buffer_free`] bytes unfilled, is resized to exactly
//! `filled + min_buffer_free`. Reallocations stay bounded by
//! `total_bytes / min_buffer_free` and the slack never exceeds one headroom.
//!
//! The unfilled tail is zero-initialized so reads can target a plain
//! `&mut [u8]`; `data.len()` is the logical capacity and `filled` the number of
//! bytes received.

use core::fmt;
use std::io::{self, Read};

use bstr::ByteSlice;
use tracing::{debug, warn};

use crate::{
    error::ReadError,
    growth::reserve_total,
    options::{IngestOptions, RECORD_DELIMITER},
};

/// Counters describing how a [`StreamBuffer`] was filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReadStats {
    /// Bytes received from the source, excluding any appended terminator.
    pub bytes_read: usize,
    /// Successful, non-empty reads.
    pub reads: usize,
    /// Reads that failed with [`io::ErrorKind::Interrupted`] and were retried.
    pub interrupted: usize,
    /// Times the buffer was reallocated to restore its free headroom.
    pub grows: usize,
}

/// The bytes ingested from one source.
///
/// Unless empty, the buffer always ends with [`RECORD_DELIMITER`], even when
/// the source's final record omitted it, and its capacity is trimmed to its
/// length.
pub struct StreamBuffer {
    data: Vec<u8>,
    stats: ReadStats,
    read_error: Option<ReadError>,
}

impl StreamBuffer {
    /// The ingested bytes, including the trailing delimiter.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes held, including the trailing delimiter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the source produced no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read counters for this buffer.
    #[must_use]
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// The error that cut ingestion short, if any.
    ///
    /// When this is `Some`, the buffer holds everything received before the
    /// failure; the last record may be truncated.
    #[must_use]
    pub fn read_error(&self) -> Option<&ReadError> {
        self.read_error.as_ref()
    }

    pub(crate) fn take_read_error(&mut self) -> Option<ReadError> {
        self.read_error.take()
    }

    /// Consume the buffer, returning the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Bytes of the buffer shown by its `Debug` output.
const DEBUG_PREFIX_LEN: usize = 64;

impl fmt::Debug for StreamBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.data.len().min(DEBUG_PREFIX_LEN);
        f.debug_struct("StreamBuffer")
            .field("len", &self.data.len())
            .field("prefix", &self.data[..shown].as_bstr())
            .field("stats", &self.stats)
            .field("read_error", &self.read_error)
            .finish()
    }
}

/// Read `source` to exhaustion using the default [`IngestOptions`].
///
/// See [`read_all_with`].
pub fn read_all<R: Read>(source: R) -> StreamBuffer {
    read_all_with(source, &IngestOptions::default())
}

/// Read `source` to exhaustion into a single owned buffer.
///
/// A zero-length read ends the stream. Interrupted reads are retried. Any
/// other I/O error is logged and ends the stream early: the bytes captured so
/// far are kept and the error is available from
/// [`StreamBuffer::read_error`].
///
/// # Aborts
///
/// Aborts the process if the buffer cannot be grown.
pub fn read_all_with<R: Read>(mut source: R, options: &IngestOptions) -> StreamBuffer {
    let min_free = options.min_buffer_free.max(1);
    let mut data = Vec::new();
    grow_to(&mut data, options.initial_buffer_size.max(min_free));

    let mut stats = ReadStats::default();
    let mut read_error = None;
    let mut filled = 0;

    loop {
        match source.read(&mut data[filled..]) {
            Ok(0) => break,
            Ok(n) => {
                filled += n;
                stats.reads += 1;
                if data.len() - filled < min_free {
                    grow_to(&mut data, filled + min_free);
                    stats.grows += 1;
                    debug!(filled, capacity = data.len(), "grew ingestion buffer");
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                stats.interrupted += 1;
            }
            Err(err) => {
                warn!(captured = filled, error = %err, "read failed, keeping partial input");
                read_error = Some(ReadError::new(filled, err));
                break;
            }
        }
    }

    stats.bytes_read = filled;
    data.truncate(filled);
    if data.last().is_some_and(|&b| b != RECORD_DELIMITER) {
        reserve_total(&mut data, filled + 1);
        data.push(RECORD_DELIMITER);
    }
    data.shrink_to_fit();

    debug!(
        bytes = stats.bytes_read,
        reads = stats.reads,
        grows = stats.grows,
        "ingestion buffer complete"
    );

    StreamBuffer {
        data,
        stats,
        read_error,
    }
}

fn grow_to(data: &mut Vec<u8>, capacity: usize) {
    reserve_total(data, capacity);
    data.resize(capacity, 0);
}
