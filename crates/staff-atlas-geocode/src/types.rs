use crate::errors::GeocodeResult;
use serde::{Deserialize, Serialize};

/// Result of a successful address lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Decimal latitude
    pub lat: f64,

    /// Decimal longitude
    pub lng: f64,

    /// The service's display name for the place, falling back to the query
    /// text when the service returns none.
    pub address: String,
}

/// Outcome of one address within a batch lookup. A failed address never
/// aborts the batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The queried address, verbatim.
    pub address: String,

    /// The lookup result for this address.
    pub result: GeocodeResult<Location>,
}

/// One place entry in a Nominatim search response. Coordinates arrive as
/// strings on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}
