/*!
# Record Mapper

Maps positional fields to [`PersonnelRecord`] and back.

Decoding applies defaults instead of failing: unparsable numbers fall back to
documented values, empty text falls back to placeholder text, and a row is
skipped (never an error) only when its name and department are both empty.
Encoding is the exact inverse for every field it defines, so
decode → encode → decode reproduces identical records whenever the first
decode triggered no defaulting.
*/

use crate::decoder::decode_rows;
use crate::errors::CsvResult;
use chrono::{Local, Utc};
use staff_atlas_records::{
    GeoPoint, PersonnelRecord, DEFAULT_LAT, DEFAULT_LNG, RESIDENCE_LABEL, UNCLASSIFIED_DEPARTMENT,
    UNKNOWN_ADDRESS, UNKNOWN_TEXT, WORKPLACE_LABEL,
};

/// Header line emitted on export, in the fixed 11-column order.
pub const EXPORT_HEADER: &str =
    "ID,姓名,部门,职位,居住地地址,居住地纬度,居住地经度,工作地地址,工作地纬度,工作地经度,入职日期";

// Column positions. Mapping is strictly positional; header order is never
// consulted.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_DEPARTMENT: usize = 2;
const COL_POSITION: usize = 3;
const COL_RESIDENCE_ADDRESS: usize = 4;
const COL_RESIDENCE_LAT: usize = 5;
const COL_RESIDENCE_LNG: usize = 6;
const COL_WORKPLACE_ADDRESS: usize = 7;
const COL_WORKPLACE_LAT: usize = 8;
const COL_WORKPLACE_LNG: usize = 9;
const COL_JOIN_DATE: usize = 10;

// ================================================================================================
// Decode direction
// ================================================================================================

/// Decode raw text into records.
///
/// Fails only on file-level format errors; individual bad rows are defaulted
/// or skipped and never abort the batch.
pub fn decode_records(text: &str) -> CsvResult<Vec<PersonnelRecord>> {
    let rows = decode_rows(text)?;

    let now_millis = Utc::now().timestamp_millis();
    let today = Local::now().format("%Y-%m-%d").to_string();

    Ok(rows
        .iter()
        .enumerate()
        .filter_map(|(index, fields)| map_row(fields, index, now_millis, &today))
        .collect())
}

/// Map one decoded row to a record, or `None` to skip it.
fn map_row(
    fields: &[String],
    index: usize,
    now_millis: i64,
    today: &str,
) -> Option<PersonnelRecord> {
    let name = field(fields, COL_NAME);
    let department = field(fields, COL_DEPARTMENT);

    // The one structural validation rule: a row carrying neither a name nor
    // a department is dropped rather than defaulted.
    if name.is_empty() && department.is_empty() {
        return None;
    }

    let id = field(fields, COL_ID)
        .parse::<i64>()
        .unwrap_or(now_millis + index as i64);

    Some(PersonnelRecord {
        id,
        name: text_or(name, UNKNOWN_TEXT),
        department: text_or(department, UNCLASSIFIED_DEPARTMENT),
        position: text_or(field(fields, COL_POSITION), UNKNOWN_TEXT),
        residence: GeoPoint {
            label: RESIDENCE_LABEL.to_string(),
            address: text_or(field(fields, COL_RESIDENCE_ADDRESS), UNKNOWN_ADDRESS),
            lat: coordinate_or(field(fields, COL_RESIDENCE_LAT), DEFAULT_LAT),
            lng: coordinate_or(field(fields, COL_RESIDENCE_LNG), DEFAULT_LNG),
        },
        workplace: GeoPoint {
            label: WORKPLACE_LABEL.to_string(),
            address: text_or(field(fields, COL_WORKPLACE_ADDRESS), UNKNOWN_ADDRESS),
            lat: coordinate_or(field(fields, COL_WORKPLACE_LAT), DEFAULT_LAT),
            lng: coordinate_or(field(fields, COL_WORKPLACE_LNG), DEFAULT_LNG),
        },
        join_date: text_or(field(fields, COL_JOIN_DATE), today),
    })
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

fn text_or(raw: &str, default: &str) -> String {
    if raw.is_empty() {
        default.to_string()
    } else {
        raw.to_string()
    }
}

fn coordinate_or(raw: &str, default: f64) -> f64 {
    raw.parse::<f64>().unwrap_or(default)
}

// ================================================================================================
// Encode direction
// ================================================================================================

/// Encode records into the canonical 11-column layout with the fixed header
/// line prepended.
///
/// Text columns are always wrapped in quotes; numeric fields are emitted in
/// native decimal form unquoted. Encoding has no failure path.
pub fn encode_records(records: &[PersonnelRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    for record in records {
        lines.push(encode_record(record));
    }
    lines.join("\n")
}

fn encode_record(record: &PersonnelRecord) -> String {
    format!(
        "{},\"{}\",\"{}\",\"{}\",\"{}\",{},{},\"{}\",{},{},{}",
        record.id,
        record.name,
        record.department,
        record.position,
        record.residence.address,
        record.residence.lat,
        record.residence.lng,
        record.workplace.address,
        record.workplace.lat,
        record.workplace.lng,
        record.join_date,
    )
}

// ================================================================================================
// Tests
// ================================================================================================
