#![no_main]
use std::io::{self, Read};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pathtable::{IngestOptions, RECORD_DELIMITER, ingest_with};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Bit 0: skip empty records. Bit 1: fail instead of ending cleanly.
    flags: u8,
    /// Derives the size of every read handed to the reader.
    split_seed: u32,
    initial_buffer_size: u8,
    min_buffer_free: u8,
    data: Vec<u8>,
}

/// Serves `data` in seed-derived pieces, interleaving interruptions, then
/// either reports end of stream or a hard failure.
struct SplitReader<'a> {
    data: &'a [u8],
    seed: u32,
    fail_at_end: bool,
    interrupt: bool,
}

impl Read for SplitReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt && self.seed & 1 != 0 {
            return Err(io::ErrorKind::Interrupted.into());
        }
        if self.data.is_empty() {
            return if self.fail_at_end {
                Err(io::Error::other("fuzz failure"))
            } else {
                Ok(0)
            };
        }
        self.seed = self.seed.rotate_left(7) ^ 0x9e37_79b9;
        let size = (self.seed as usize % self.data.len()) + 1;
        let n = size.min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn expected_records(data: &[u8], skip_empty: bool) -> usize {
    let mut records: Vec<&[u8]> = data.split(|&b| b == RECORD_DELIMITER).collect();
    // `split` yields a final piece after the last delimiter; it is a record
    // only if non-empty (an unterminated tail).
    if records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }
    if skip_empty {
        records.retain(|r| !r.is_empty());
    }
    records.len()
}

fn ingest(input: &Input) {
    let options = IngestOptions {
        initial_buffer_size: usize::from(input.initial_buffer_size),
        min_buffer_free: usize::from(input.min_buffer_free),
        skip_empty_records: input.flags & 1 != 0,
    };
    let reader = SplitReader {
        data: &input.data,
        seed: input.split_seed,
        fail_at_end: input.flags & 2 != 0,
        interrupt: false,
    };
    let table = ingest_with(reader, &options);

    assert_eq!(
        table.record_count(),
        expected_records(&input.data, options.skip_empty_records)
    );
    assert_eq!(table.stats().bytes_read, input.data.len());
    assert_eq!(table.read_error().is_some(), input.flags & 2 != 0);
    for record in &table {
        assert!(record.directory_length() <= record.path().len());
        assert!(!record.path().contains(&RECORD_DELIMITER));
    }
    for pair in table.records().as_slice().windows(2) {
        assert!(pair[0].path() <= pair[1].path());
    }
}

fuzz_target!(|input: Input| ingest(&input));
