/// Bytes allocated for the ingestion buffer before the first read.
pub const INIT_BUFFER_SIZE: usize = 128 * 1024;

/// Minimum free space kept at the tail of the ingestion buffer.
///
/// When a read leaves less than this many unfilled bytes, the buffer is grown
/// to `filled + MIN_BUFFER_FREE`.
pub const MIN_BUFFER_FREE: usize = 32 * 1024;

/// Byte separating records in the input stream.
pub const RECORD_DELIMITER: u8 = b'\0';

/// Byte separating directory components inside a path.
pub const DIRECTORY_SEPARATOR: u8 = b'/';

/// Configuration options for ingesting a path stream.
///
/// # Examples
///
/// ```rust
/// use pathtable::IngestOptions;
///
/// let options = IngestOptions {
///     skip_empty_records: true,
///     ..Default::default()
/// };
/// assert_eq!(options.initial_buffer_size, 128 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Capacity of the ingestion buffer before the first read.
    ///
    /// # Default
    ///
    /// [`INIT_BUFFER_SIZE`] (128 KiB)
    pub initial_buffer_size: usize,

    /// Free space the reader keeps available for the next read.
    ///
    /// Growth is demand-driven: once fewer than this many bytes remain
    /// unfilled, capacity becomes `filled + min_buffer_free`. The number of
    /// reallocations is therefore bounded by `total_bytes / min_buffer_free`.
    /// A value of zero is treated as one.
    ///
    /// # Default
    ///
    /// [`MIN_BUFFER_FREE`] (32 KiB)
    pub min_buffer_free: usize,

    /// Whether to drop empty records produced by adjacent delimiters.
    ///
    /// By default a doubled delimiter in the stream yields a record with an
    /// empty path and a `directory_length` of zero.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_empty_records: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            initial_buffer_size: INIT_BUFFER_SIZE,
            min_buffer_free: MIN_BUFFER_FREE,
            skip_empty_records: false,
        }
    }
}
