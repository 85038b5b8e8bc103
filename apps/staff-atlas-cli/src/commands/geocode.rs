use crate::error::CliResult;
use staff_atlas_geocode::{GeocodeClient, GeocodeConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Resolve one or more addresses, reusing and updating the cache file.
pub fn execute(addresses: Vec<String>, delay_ms: u64, cache_file: PathBuf) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let mut client = GeocodeClient::with_config(GeocodeConfig {
        batch_delay: Duration::from_millis(delay_ms),
        ..GeocodeConfig::default()
    })?;

    let loaded = client.load_cache(&cache_file)?;
    if loaded > 0 {
        println!(
            "Loaded {} cached result(s) from {}",
            loaded,
            cache_file.display()
        );
    }

    let outcomes = runtime.block_on(client.lookup_batch(&addresses));

    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(location) => {
                println!("{} -> ({}, {})", outcome.address, location.lat, location.lng);
                println!("  {}", location.address);
            }
            Err(e) => {
                failures += 1;
                println!("{} -> error: {}", outcome.address, e);
            }
        }
    }

    client.save_cache(&cache_file)?;
    println!(
        "\n{} resolved, {} failed",
        outcomes.len() - failures,
        failures
    );

    Ok(())
}
