/*!
# Staff Atlas Record Model

This crate provides the **authoritative in-memory data model** for the
staff-atlas toolkit.

## Purpose

This crate serves as the single source of truth for the record types shared
between:

- **`staff-atlas-csvs`** (producer/consumer) → decodes and encodes datasets
- **`staff-atlas-cli`** (consumer) → imports, exports, and searches datasets

## Contents

- [`PersonnelRecord`] / [`GeoPoint`]: one employee's identity plus their
  residence and workplace locations.
- [`RecordStore`]: the working dataset, an ordered sequence of records that
  is replaced wholesale on import and serialized wholesale on export.
- [`RecordFilter`]: department and free-text matching over a dataset.
*/

pub mod filter;
pub mod record;
pub mod store;

// Re-export main types for convenience
pub use filter::{departments, filter_records, RecordFilter};
pub use record::{
    GeoPoint, PersonnelRecord, DEFAULT_LAT, DEFAULT_LNG, RESIDENCE_LABEL, UNCLASSIFIED_DEPARTMENT,
    UNKNOWN_ADDRESS, UNKNOWN_TEXT, WORKPLACE_LABEL,
};
pub use store::RecordStore;
