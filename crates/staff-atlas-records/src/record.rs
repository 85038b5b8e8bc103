/*!
# Record Types

Defines the personnel record and geographic point types plus the defaulting
vocabulary applied when source fields are missing or unparsable.
*/

use serde::{Deserialize, Serialize};

/// Fallback latitude when a coordinate field is missing or unparsable (Beijing).
pub const DEFAULT_LAT: f64 = 39.9042;

/// Fallback longitude when a coordinate field is missing or unparsable (Beijing).
pub const DEFAULT_LNG: f64 = 116.4074;

/// Placeholder for a missing address.
pub const UNKNOWN_ADDRESS: &str = "未知地址";

/// Placeholder for a missing name or position.
pub const UNKNOWN_TEXT: &str = "未知";

/// Placeholder for a missing department.
pub const UNCLASSIFIED_DEPARTMENT: &str = "未分类";

/// Label attached to decoded residence points.
pub const RESIDENCE_LABEL: &str = "家";

/// Label attached to decoded workplace points.
pub const WORKPLACE_LABEL: &str = "工作地点";

/// A named location with address text and decimal coordinates.
///
/// Coordinates are plain IEEE-754 doubles; no bounds validation is performed,
/// so values outside valid Earth ranges pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    /// Human-readable label ("家", "工作地点", ...)
    pub label: String,

    /// Free-text address
    pub address: String,

    /// Decimal latitude
    pub lat: f64,

    /// Decimal longitude
    pub lng: f64,
}

impl GeoPoint {
    /// A point carrying every default: unknown address at the fallback coordinates.
    pub fn unknown(label: &str) -> Self {
        Self {
            label: label.to_string(),
            address: UNKNOWN_ADDRESS.to_string(),
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
        }
    }
}

/// One employee's identity, residence, and workplace data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonnelRecord {
    /// Unique within a loaded dataset. Synthesized from current time + row
    /// index when the source field is absent or unparsable, so uniqueness is
    /// best-effort across rapid re-imports.
    pub id: i64,

    /// Employee name
    pub name: String,

    /// Department name
    pub department: String,

    /// Job title
    pub position: String,

    /// Where the employee lives
    pub residence: GeoPoint,

    /// Where the employee works
    pub workplace: GeoPoint,

    /// Join date in `YYYY-MM-DD` form
    pub join_date: String,
}
