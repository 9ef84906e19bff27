//! Basic usage example for travel-advisory-map
//!
//! This example demonstrates how to:
//! - Load the bundled advisory snapshot through the session cache
//! - Look advisories up by code and by exact name
//! - Filter the dropdown options
//! - Classify countries into zoom tiers

use travel_advisory_map::prelude::*;
use travel_advisory_map::JsonFileSource;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Travel Advisory Map: Basic Usage ===\n");

    let cache = AdvisoryCache::new(JsonFileSource::bundled_sample());
    let catalog = cache.catalog().await?;
    println!("✓ Loaded {} countries\n", catalog.len());

    println!("--- Advisory by code (\"fr\") ---");
    if let Some(france) = cache.advisory_by_code("fr").await? {
        println!("{}\n", PopupContent::from_advisory(&france));
    }

    println!("--- Advisory by name ---");
    for name in ["Côte d'Ivoire", "cote d'ivoire"] {
        let found = cache.advisory_by_name(name).await?;
        println!("{name:?}: {}", found.map(|a| a.code).unwrap_or_else(|| "not found".into()));
    }
    println!();

    println!("--- Dropdown search \"an\" ---");
    for option in filter_options(&cache.options().await?, "an") {
        println!("- {} ({})", option.name, option.code);
    }
    println!();

    println!("--- Zoom tiers ---");
    for code in ["VA", "SZ", "DE", "CA", "US", "AQ"] {
        match classify_tier(code) {
            Some(tier) => println!("{code}: {tier} -> zoom {}", tier.zoom()),
            None => println!("{code}: unclassified, map keeps its zoom"),
        }
    }

    println!("\nCatalog fetched {} time(s)", cache.fetch_count());
    Ok(())
}
