/*!
# Geocoding Client Implementation

Main client providing cached, rate-limit-respecting address lookups against
the Nominatim HTTP API.
*/

use crate::{
    config::GeocodeConfig,
    errors::{GeocodeError, GeocodeResult},
    types::{BatchOutcome, Location, NominatimPlace},
};
use backoff::future::retry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// Conventional cache file name, shared with the coordinate-filling tool.
pub const DEFAULT_CACHE_FILE: &str = "geocode_cache.json";

/// Cached client for address→coordinate lookups.
pub struct GeocodeClient {
    http: reqwest::Client,
    config: GeocodeConfig,
    cache: HashMap<String, Location>,
}

impl GeocodeClient {
    /// Create a new client with default configuration.
    pub fn new() -> GeocodeResult<Self> {
        Self::with_config(GeocodeConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(config: GeocodeConfig) -> GeocodeResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cache: HashMap::new(),
        })
    }

    /// Number of cached lookup results.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Whether `address` would be answered from cache.
    pub fn is_cached(&self, address: &str) -> bool {
        self.cache.contains_key(address.trim())
    }

    // ================================================================================================
    // Lookups
    // ================================================================================================

    /// Resolve one address, consulting the cache first.
    pub async fn lookup(&mut self, address: &str) -> GeocodeResult<Location> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }

        if let Some(hit) = self.cache.get(address) {
            debug!(address, "geocode cache hit");
            return Ok(hit.clone());
        }

        let location = self.fetch(address).await?;
        self.cache.insert(address.to_string(), location.clone());
        Ok(location)
    }

    /// Resolve addresses sequentially, sleeping the configured delay between
    /// network requests. One failed address never aborts the batch.
    pub async fn lookup_batch(&mut self, addresses: &[String]) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::with_capacity(addresses.len());

        for (index, address) in addresses.iter().enumerate() {
            let went_to_network = !self.is_cached(address);
            let result = self.lookup(address).await;
            outcomes.push(BatchOutcome {
                address: address.clone(),
                result,
            });

            // Rate limit applies to requests, not cache hits
            if went_to_network && index + 1 < addresses.len() {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        outcomes
    }

    /// Fetch with retry; transport failures are transient, everything else
    /// is permanent.
    async fn fetch(&self, address: &str) -> GeocodeResult<Location> {
        let operation = || async {
            self.fetch_once(address).await.map_err(|e| match e {
                GeocodeError::Http(_) => {
                    warn!(address, error = %e, "geocode request failed, will retry");
                    backoff::Error::transient(e)
                }
                other => backoff::Error::permanent(other),
            })
        };

        retry(self.config.retry_backoff.clone(), operation).await
    }

    async fn fetch_once(&self, address: &str) -> GeocodeResult<Location> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocodeError::InvalidConfig(format!("bad base URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("accept-language", &self.config.accept_language);

        info!(address, "requesting geocode");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let places: Vec<NominatimPlace> = response.json().await?;

        match places.into_iter().next() {
            Some(place) => {
                let location = place_to_location(place, address)?;
                info!(address, lat = location.lat, lng = location.lng, "geocode success");
                Ok(location)
            }
            None => {
                warn!(address, "address not found");
                Err(GeocodeError::NotFound(address.to_string()))
            }
        }
    }

    // ================================================================================================
    // Cache persistence
    // ================================================================================================

    /// Merge cache entries from a JSON file. A missing file is not an error;
    /// returns the number of entries loaded.
    pub fn load_cache<P: AsRef<Path>>(&mut self, path: P) -> GeocodeResult<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(0);
        }

        let text = fs::read_to_string(path)?;
        let entries: HashMap<String, Location> = serde_json::from_str(&text)?;
        let count = entries.len();
        self.cache.extend(entries);
        debug!(count, path = %path.display(), "loaded geocode cache");
        Ok(count)
    }

    /// Write the full cache to a JSON file.
    pub fn save_cache<P: AsRef<Path>>(&self, path: P) -> GeocodeResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.cache)?;
        fs::write(path, text)?;
        debug!(count = self.cache.len(), path = %path.display(), "saved geocode cache");
        Ok(())
    }
}

fn place_to_location(place: NominatimPlace, query: &str) -> GeocodeResult<Location> {
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude: {}", place.lat)))?;
    let lng = place
        .lon
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude: {}", place.lon)))?;

    Ok(Location {
        lat,
        lng,
        address: place
            .display_name
            .unwrap_or_else(|| query.to_string()),
    })
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_cache_json() -> &'static str {
        r#"{
            "北京市海淀区中关村南大街5号": {
                "lat": 39.9607,
                "lng": 116.3413,
                "address": "中关村南大街, 海淀区, 北京市"
            }
        }"#
    }

    #[test]
    fn test_empty_address_is_rejected_without_network() {
        let mut client = GeocodeClient::new().unwrap();
        let result = tokio_test::block_on(client.lookup(""));
        assert!(matches!(result, Err(GeocodeError::EmptyAddress)));

        let result = tokio_test::block_on(client.lookup("   "));
        assert!(matches!(result, Err(GeocodeError::EmptyAddress)));
    }

    #[test]
    fn test_cache_hit_short_circuits_network() {
        let dir = tempdir().unwrap();
        let cache_path = dir.path().join(DEFAULT_CACHE_FILE);
        fs::write(&cache_path, sample_cache_json()).unwrap();

        // Unroutable base URL: any network attempt would error out
        let mut client = GeocodeClient::with_config(GeocodeConfig {
            base_url: "http://127.0.0.1:1/search".to_string(),
            retry_backoff: backoff::ExponentialBackoff {
                max_elapsed_time: Some(std::time::Duration::from_millis(1)),
                ..Default::default()
            },
            ..GeocodeConfig::default()
        })
        .unwrap();
        assert_eq!(client.load_cache(&cache_path).unwrap(), 1);

        let location =
            tokio_test::block_on(client.lookup("北京市海淀区中关村南大街5号")).unwrap();
        assert_eq!(location.lat, 39.9607);
        assert_eq!(location.lng, 116.3413);

        // Trimmed queries hit the same entry
        assert!(client.is_cached(" 北京市海淀区中关村南大街5号 "));
    }

    #[test]
    fn test_cache_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let first_path = dir.path().join("a.json");
        let second_path = dir.path().join("b.json");
        fs::write(&first_path, sample_cache_json()).unwrap();

        let mut client = GeocodeClient::new().unwrap();
        client.load_cache(&first_path).unwrap();
        client.save_cache(&second_path).unwrap();

        let mut reloaded = GeocodeClient::new().unwrap();
        assert_eq!(reloaded.load_cache(&second_path).unwrap(), 1);
        assert_eq!(reloaded.cache_len(), 1);
    }

    #[test]
    fn test_missing_cache_file_loads_nothing() {
        let mut client = GeocodeClient::new().unwrap();
        let loaded = client.load_cache("no/such/geocode_cache.json").unwrap();
        assert_eq!(loaded, 0);
        assert_eq!(client.cache_len(), 0);
    }

    #[test]
    fn test_place_to_location_parses_wire_strings() {
        let place = NominatimPlace {
            lat: "39.9042".to_string(),
            lon: "116.4074".to_string(),
            display_name: Some("北京市, 中国".to_string()),
        };
        let location = place_to_location(place, "北京").unwrap();
        assert_eq!(location.lat, 39.9042);
        assert_eq!(location.lng, 116.4074);
        assert_eq!(location.address, "北京市, 中国");
    }

    #[test]
    fn test_place_to_location_falls_back_to_query() {
        let place = NominatimPlace {
            lat: "1.5".to_string(),
            lon: "2.5".to_string(),
            display_name: None,
        };
        let location = place_to_location(place, "某地").unwrap();
        assert_eq!(location.address, "某地");
    }

    #[test]
    fn test_place_to_location_rejects_bad_coordinates() {
        let place = NominatimPlace {
            lat: "not-a-number".to_string(),
            lon: "116.4074".to_string(),
            display_name: None,
        };
        let result = place_to_location(place, "某地");
        assert!(matches!(result, Err(GeocodeError::InvalidResponse(_))));
    }
}
