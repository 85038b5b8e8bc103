/*!
# Dataset File I/O

Thin UTF-8 file wrappers around the pure text codec, for callers that work
with paths rather than strings.
*/

use crate::errors::CsvResult;
use crate::mapper::{decode_records, encode_records};
use staff_atlas_records::PersonnelRecord;
use std::fs;
use std::path::Path;

/// Read and decode a dataset CSV file.
pub fn read_records_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<PersonnelRecord>> {
    let text = fs::read_to_string(path)?;
    decode_records(&text)
}

/// Encode and write a dataset CSV file.
pub fn write_records_csv<P: AsRef<Path>>(path: P, records: &[PersonnelRecord]) -> CsvResult<()> {
    let mut text = encode_records(records);
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
