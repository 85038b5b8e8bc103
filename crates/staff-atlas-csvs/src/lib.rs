/*!
# Staff Atlas CSV Codec

This crate provides the **authoritative delimited-text codec** for staff-atlas
datasets.

## Purpose

This crate is the single source of truth for the dataset file contract
between:

- **`export`** (producer) → Writes dataset CSV files
- **`import`** (consumer) → Reads dataset CSV files
- Any hosting application embedding the codec

## File format

UTF-8, comma-separated, optional double-quote field quoting, header row
required. Columns are positionally fixed:

| # | Column | | # | Column |
|---|--------|-|---|--------|
| 0 | ID | | 6 | 居住地经度 |
| 1 | 姓名 | | 7 | 工作地地址 |
| 2 | 部门 | | 8 | 工作地纬度 |
| 3 | 职位 | | 9 | 工作地经度 |
| 4 | 居住地地址 | | 10 | 入职日期 |
| 5 | 居住地纬度 | | | |

Decoding applies field-level defaults instead of failing: unparsable numbers
become documented fallbacks, empty text becomes placeholder text, and a row
is dropped only when its name and department are both empty. The only fatal
errors are file-level: too few lines, or a header carrying none of the
required column tokens.

## Usage

```rust
use staff_atlas_csvs::{decode_records, encode_records, CsvResult};

fn example(text: &str) -> CsvResult<String> {
    let records = decode_records(text)?;
    Ok(encode_records(&records))
}
```
*/

pub mod decoder;
pub mod errors;
pub mod io;
pub mod mapper;

// Re-export main entry points for convenience
pub use decoder::{decode_rows, REQUIRED_HEADER_TOKENS};
pub use errors::{CsvError, CsvResult};
pub use io::{read_records_csv, write_records_csv};
pub use mapper::{decode_records, encode_records, EXPORT_HEADER};
