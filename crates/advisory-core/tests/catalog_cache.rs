mod common;

use advisory_core::{load_catalog, AdvisoryCache, JsonFileSource};
use common::CountingSource;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn repeated_lookups_fetch_once() {
    let cache = AdvisoryCache::new(CountingSource::default());

    let first = cache.advisory_by_code("FR").await.unwrap();
    let second = cache.advisory_by_code("FR").await.unwrap();
    let by_name = cache.advisory_by_name("France").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, by_name);
    assert_eq!(cache.source().calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_access_shares_one_fetch() {
    let cache = Arc::new(AdvisoryCache::new(CountingSource {
        delay: Some(Duration::from_millis(50)),
        ..CountingSource::default()
    }));

    let mut handles = Vec::new();
    for code in ["FR", "DE", "US", "AQ", "fr", "de", "ZZ", "us"] {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move { cache.advisory_by_code(code).await }));
    }
    let mut found = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().is_some() {
            found += 1;
        }
    }

    assert_eq!(found, 7);
    assert_eq!(cache.source().calls(), 1);
    assert_eq!(cache.fetch_count(), 1);
}

#[tokio::test]
async fn name_lookup_is_case_sensitive() {
    let cache = AdvisoryCache::new(CountingSource::default());

    assert!(cache.advisory_by_name("Germany").await.unwrap().is_some());
    assert!(cache.advisory_by_name("germany").await.unwrap().is_none());
    assert!(cache.advisory_by_name("GERMANY").await.unwrap().is_none());
}

#[tokio::test]
async fn options_are_alphabetical() {
    let cache = AdvisoryCache::new(CountingSource::default());
    let names: Vec<_> = cache.options().await.unwrap().into_iter().map(|o| o.name).collect();
    assert_eq!(names, ["Antarctica", "France", "Germany", "United States"]);
}

#[tokio::test]
async fn bundled_sample_through_the_trait() {
    let catalog = load_catalog(&JsonFileSource::bundled_sample()).await.unwrap();
    let ci = catalog.advisory_by_code("CI").unwrap();
    assert_eq!(ci.name, "Côte d'Ivoire");
    assert!(catalog.advisory_by_name("Cote d'Ivoire").is_none());
}
