/*!
# Staff Atlas Geocoding Client

Optional, separable utility that resolves free-text addresses to coordinates
via the OpenStreetMap Nominatim service. Nothing in the dataset codec depends
on this crate; it exists for the tooling that fills missing coordinates in
source files.

## Behavior

- An address→result cache is consulted before any network call and lives for
  the client's lifetime; it can be persisted to and reloaded from a JSON file
  across runs.
- Batch lookups resolve sequentially with a configurable delay between
  network requests (default 1000 ms) to respect Nominatim rate limits; cache
  hits do not consume delay.
- Transport failures are retried with exponential backoff; an empty address
  or an address the service does not know is failed immediately.
*/

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types for convenience
pub use client::{GeocodeClient, DEFAULT_CACHE_FILE};
pub use config::GeocodeConfig;
pub use errors::{GeocodeError, GeocodeResult};
pub use types::{BatchOutcome, Location};
