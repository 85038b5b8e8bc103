/*!
# Delimited-Text Decoder

Splits raw text into rows and quoted fields, tolerant of embedded separators
inside quotes.

The scanner is deliberately simpler than RFC 4180: a double quote toggles an
in-quotes flag wherever it appears and is never copied into the field, there
is no escape sequence for literal quotes, and fields are trimmed of
surrounding whitespace. This matches the encoder in [`crate::mapper`], which
always wraps text columns in quotes.
*/

use crate::errors::{CsvError, CsvResult};

/// Header tokens, at least one of which must appear (as a substring of some
/// header field, case-insensitive) for the file to be accepted. Covers both
/// the English column vocabulary and the Chinese export header.
pub const REQUIRED_HEADER_TOKENS: &[&str] = &[
    "id",
    "name",
    "姓名",
    "department",
    "部门",
    "position",
    "职位",
];

/// Decode raw text into data rows, validating the header line.
///
/// The header is consumed by the validation check and not returned; field
/// mapping is strictly positional and independent of header order.
pub fn decode_rows(text: &str) -> CsvResult<Vec<Vec<String>>> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(CsvError::TooFewLines);
    }

    validate_header(lines[0])?;

    Ok(lines[1..].iter().map(|line| parse_line(line)).collect())
}

/// Split one line into fields.
///
/// A `,` outside quotes ends the current field; characters inside quotes are
/// copied verbatim, separators included. Every field is trimmed.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Check that the header names at least one known column.
///
/// Quirk preserved from the original: *any* required token satisfies the
/// check, not all of them.
fn validate_header(line: &str) -> CsvResult<()> {
    let fields: Vec<String> = line
        .split(',')
        .map(|field| {
            let field = field.trim();
            let field = field.strip_prefix('"').unwrap_or(field);
            let field = field.strip_suffix('"').unwrap_or(field);
            field.trim().to_lowercase()
        })
        .collect();

    let has_required = fields
        .iter()
        .any(|field| REQUIRED_HEADER_TOKENS.iter().any(|token| field.contains(token)));

    if has_required {
        Ok(())
    } else {
        Err(CsvError::MissingHeaderTokens(
            REQUIRED_HEADER_TOKENS.join("/"),
        ))
    }
}

// ================================================================================================
// Tests
// ================================================================================================
