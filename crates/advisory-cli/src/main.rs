//! advisory — command-line front end for advisory-core
//!
//! Prints the same things the advisory map page shows: the country list,
//! an advisory popup, the zoom level a country gets, and the full dropdown
//! and map-click flows against a printing map.
//!
//! Usage examples
//! --------------
//!
//! - List countries, optionally filtered
//!   $ advisory countries
//!   $ advisory countries --search ivo
//!
//! - Advisory by code (case-insensitive) or by exact name
//!   $ advisory advisory fr
//!   $ advisory by-name "Côte d'Ivoire"
//!
//! - Zoom level for a code
//!   $ advisory zoom US
//!
//! - Dropdown and map-click flows (need an OpenCage key)
//!   $ advisory locate DE
//!   $ advisory click 52.52 13.405
//!
//! Data source
//! -----------
//!
//! By default the live feed is fetched. `--source` accepts another URL or a
//! path to a saved copy of the feed, and `--offline` uses the sample bundled
//! with advisory-core. Set `RUST_LOG=debug` to see cache and flow logs.
mod args;
mod display;

use crate::args::{CliArgs, Commands};
use crate::display::{PrintMap, StderrNotifier};
use advisory_core::prelude::*;
use advisory_core::selection::NoOpReason;
use advisory_core::{validate_tiers, HttpAdvisorySource, JsonFileSource, OpenCageGeocoder};
use anyhow::Context;
use clap::Parser;
use secrecy::Secret;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type DynSource = Box<dyn AdvisorySource>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = build_config(&args);
    tracing::debug!(
        advisory_url = %config.advisory_url,
        timeout_secs = config.http_timeout_secs,
        "configuration loaded"
    );

    match &args.command {
        Commands::Zoom { code } => {
            match ZoomTier::of(&code) {
                Some(tier) => println!("{}: {} (zoom {})", code.trim().to_uppercase(), tier, tier.zoom()),
                None => println!("{}: unclassified (map keeps its current zoom)", code.trim().to_uppercase()),
            }
            return Ok(());
        }
        Commands::Tiers => {
            for tier in ZoomTier::ALL {
                println!("{:<4} zoom {:>2}  {} codes", tier.label(), tier.zoom(), tier.codes().len());
            }
            validate_tiers().context("zoom tiers overlap")?;
            println!("tiers are disjoint");
            return Ok(());
        }
        _ => {}
    }

    let source = open_source(&args, &config)?;
    let cache = Arc::new(AdvisoryCache::new(source));

    match args.command {
        Commands::Countries { search } => {
            let options = cache.options().await.map_err(catalog_error)?;
            let options = filter_options(&options, search.as_deref().unwrap_or(""));
            if options.is_empty() {
                println!("No countries match.");
            }
            for o in options {
                println!("{} ({})", o.name, o.code);
            }
        }

        Commands::Advisory { code } => {
            match cache.advisory_by_code(&code).await.map_err(catalog_error)? {
                Some(advisory) => print_advisory(&advisory),
                None => eprintln!("No advisory found for: {code}"),
            }
        }

        Commands::ByName { name } => {
            match cache.advisory_by_name(&name).await.map_err(catalog_error)? {
                Some(advisory) => print_advisory(&advisory),
                None => eprintln!("No advisory found for name: {name} (names are case-sensitive)"),
            }
        }

        Commands::Locate { code } => {
            let controller = controller(cache, &config)?;
            report(controller.select_code(&code).await)?;
        }

        Commands::Click { lat, lng } => {
            let controller = controller(cache, &config)?;
            report(controller.select_at(LatLng::new(lat, lng)).await)?;
        }

        Commands::Stats => {
            let catalog = cache.catalog().await.map_err(catalog_error)?;
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  With active sources: {}", stats.with_sources);
            println!("  Without zoom tier: {}", stats.unclassified);
        }

        Commands::Zoom { .. } | Commands::Tiers => {}
    }

    Ok(())
}

fn build_config(args: &CliArgs) -> AdvisoryConfig {
    let mut config = AdvisoryConfig::from_env();
    if let Some(secs) = args.timeout.filter(|secs| *secs > 0) {
        config.http_timeout_secs = secs;
    }
    if let Some(key) = args.api_key.as_ref().filter(|key| !key.trim().is_empty()) {
        config.geocoder_api_key = Some(Secret::new(key.trim().to_string()));
    }
    config
}

fn open_source(args: &CliArgs, config: &AdvisoryConfig) -> anyhow::Result<DynSource> {
    if args.offline {
        return Ok(Box::new(JsonFileSource::bundled_sample()));
    }
    match args.source.as_deref() {
        Some(path) if !is_url(path) => Ok(Box::new(JsonFileSource::new(path))),
        Some(url) => {
            let config = AdvisoryConfig {
                advisory_url: url.to_string(),
                ..config.clone()
            };
            Ok(Box::new(HttpAdvisorySource::from_config(&config)?))
        }
        None => Ok(Box::new(HttpAdvisorySource::from_config(config)?)),
    }
}

/// Tells the user whether running the command again may help.
fn catalog_error(err: AdvisoryError) -> anyhow::Error {
    let hint = if err.is_transient() {
        "loading advisory catalog (temporary failure, try again)"
    } else {
        "loading advisory catalog"
    };
    anyhow::Error::new(err).context(hint)
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn controller(
    cache: Arc<AdvisoryCache<DynSource>>,
    config: &AdvisoryConfig,
) -> anyhow::Result<SelectionController<DynSource, OpenCageGeocoder, PrintMap, StderrNotifier>> {
    let geocoder = OpenCageGeocoder::from_config(config)
        .context("locate and click need an OpenCage key (--api-key or OPENCAGE_API_KEY)")?;
    Ok(SelectionController::new(cache, geocoder, PrintMap).with_notifier(StderrNotifier))
}

fn print_advisory(advisory: &CountryAdvisory) {
    println!("{}", PopupContent::from_advisory(advisory));
    if let Some(score) = advisory.score {
        println!("Score: {score:.1}");
    }
    if let Some(updated) = &advisory.updated {
        println!("Updated: {updated}");
    }
    match classify_tier(&advisory.code) {
        Some(tier) => println!("Zoom: {} ({})", tier.zoom(), tier),
        None => println!("Zoom: unclassified"),
    }
}

fn report(outcome: SelectionOutcome) -> anyhow::Result<()> {
    match outcome {
        SelectionOutcome::Displayed { country, zoom: None, .. } => {
            println!("{} has no zoom tier; map zoom unchanged", country.name);
        }
        SelectionOutcome::Displayed { .. } => {}
        SelectionOutcome::NoOp(NoOpReason::UnknownCountry(c)) => eprintln!("No advisory found for: {c}"),
        SelectionOutcome::NoOp(NoOpReason::NoCoordinates(name)) => {
            eprintln!("Geocoder has no position for {name}; map unchanged")
        }
        SelectionOutcome::NoOp(NoOpReason::NoLabel) => eprintln!("Nothing known at that point"),
        SelectionOutcome::NoOp(NoOpReason::UnmatchedLabel(label)) => {
            eprintln!("{label} is not one of the selectable countries")
        }
        SelectionOutcome::Superseded { .. } => {}
        SelectionOutcome::CatalogUnavailable => anyhow::bail!("advisory catalog unavailable"),
        SelectionOutcome::GeocodeUnavailable => anyhow::bail!("geocoding service unavailable"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_say_when_a_retry_may_help() {
        let err = catalog_error(AdvisoryError::Fetch("connection reset".into()));
        assert!(err.to_string().contains("try again"), "{err}");

        let err = catalog_error(AdvisoryError::InvalidData("bad feed".into()));
        assert_eq!(err.to_string(), "loading advisory catalog");
    }
}
