use backoff::ExponentialBackoff;
use std::time::Duration;

/// Configuration for geocoding operations
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Nominatim search endpoint
    pub base_url: String,

    /// User-Agent header; Nominatim usage policy requires an identifying one
    pub user_agent: String,

    /// Preferred language for returned place names
    pub accept_language: String,

    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,

    /// Delay enforced between consecutive network requests in batch mode
    pub batch_delay: Duration,

    /// Backoff strategy for retrying transport failures
    pub retry_backoff: ExponentialBackoff,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "staff-atlas/0.1 (employee commute map toolkit)".to_string(),
            accept_language: "zh-CN".to_string(),
            request_timeout: Duration::from_secs(10),
            batch_delay: Duration::from_millis(1000),
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(5),
                max_elapsed_time: Some(Duration::from_secs(20)),
                multiplier: 2.0,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = GeocodeConfig::default();
        assert!(config.base_url.contains("nominatim.openstreetmap.org"));
        assert_eq!(config.batch_delay, Duration::from_millis(1000));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.accept_language, "zh-CN");
        assert!(!config.user_agent.is_empty());
    }
}
