use std::io::{self, Write};

use pathtable::FilenameRecord;

use crate::cli::Format;

/// Write one record in the requested format.
pub fn write_record<W: Write>(
    out: &mut W,
    format: Format,
    index: usize,
    record: &FilenameRecord,
) -> io::Result<()> {
    match format {
        Format::Lines => {
            out.write_all(record.path())?;
            out.write_all(b"\n")
        }
        Format::Print0 => {
            out.write_all(record.path())?;
            out.write_all(b"\0")
        }
        Format::Long => {
            write!(out, "{index}\t{}\t", record.directory_length())?;
            out.write_all(record.path())?;
            out.write_all(b"\n")
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, record)?;
            out.write_all(b"\n")
        }
    }
}
