use catalog_store::lifecycle::{CatalogConfig, CatalogSystem, SystemState};
use catalog_store::loader::JsonFileLoader;
use catalog_store::product_store::ErrorKind;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_for(path: &str) -> CatalogConfig {
    CatalogConfig {
        data_source: path.to_string(),
        ..CatalogConfig::default()
    }
}

/// The bundled sample file loads, skipping its deliberately broken entries.
#[tokio::test]
async fn test_sample_data_loads_best_effort() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json");
    let (system, report) = CatalogSystem::start(config_for(path), &JsonFileLoader)
        .await
        .expect("Sample data should load");

    assert!(system.is_ready());
    assert_eq!(report.loaded.len(), 6);
    assert_eq!(report.total(), 10);

    let skipped: Vec<(usize, ErrorKind)> = report
        .skipped
        .iter()
        .map(|s| (s.index, s.reason.kind()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (6, ErrorKind::ValidationFailed),
            (7, ErrorKind::ValidationFailed),
            (8, ErrorKind::ValidationFailed),
            (9, ErrorKind::AlreadyExists),
        ]
    );

    let queries = system.queries().unwrap();
    let carbon = queries.get_by_id("lap-001").await.unwrap();
    assert_eq!(carbon.name(), "ThinkPad X1 Carbon");

    // No price in the source reads as free.
    assert_eq!(queries.get_by_id("cab-001").await.unwrap().price(), 0.0);
    assert_eq!(
        queries.get_all_categories().await.unwrap(),
        vec!["Accessories", "Laptops", "Monitors"]
    );
}

#[tokio::test]
async fn test_missing_file_fails_initialisation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing-here.json");

    let mut system = CatalogSystem::new(config_for(path.to_str().unwrap())).unwrap();
    let err = system.init(&JsonFileLoader).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InitializationFailed);
    assert_eq!(system.state(), SystemState::Failed);
    assert_eq!(
        system.queries().err().map(|e| e.kind()),
        Some(ErrorKind::InitializationFailed)
    );
}

#[tokio::test]
async fn test_malformed_file_fails_initialisation() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"id": "p1", "name": "Not an array"}"#).unwrap();

    let result = CatalogSystem::start(config_for(file.path().to_str().unwrap()), &JsonFileLoader).await;

    match result {
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::InitializationFailed);
            assert!(e.to_string().contains("Malformed product data"));
        }
        Ok(_) => panic!("Malformed data should not load"),
    }
}

#[tokio::test]
async fn test_file_of_only_bad_records_is_ready_and_empty() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"[{"id": " ", "name": "Blank"}, {"id": "p1", "name": "Neg", "price": -1}]"#)
        .unwrap();

    let (system, report) =
        CatalogSystem::start(config_for(file.path().to_str().unwrap()), &JsonFileLoader)
            .await
            .unwrap();

    assert!(system.is_ready());
    assert!(report.loaded.is_empty());
    assert_eq!(report.skipped.len(), 2);
    assert!(system
        .products()
        .unwrap()
        .find_all()
        .await
        .unwrap()
        .is_empty());
}
