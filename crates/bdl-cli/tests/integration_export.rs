//! End-to-end tests of the export pipeline against an in-memory BDL backend.
//!
//! The real `BdlClient` runs over `FakeBackend`, so URL building, XML
//! parsing, pagination and the page delay are all exercised.

use std::collections::HashSet;
use std::time::Duration;

use bdl_cli::{ExportConfig, ExportError, print_page_progress, run_export};
use bdl_client::testing::{CannedResponse, FakeBackend};
use bdl_client::{BdlClient, BdlClientConfig, BdlError, Variable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

fn page(prefix: &str, count: usize) -> Vec<Variable> {
    (0..count)
        .map(|i| Variable::new(format!("{prefix}{i:02}"), format!("Zmienna {prefix}{i}")))
        .collect()
}

fn export_config(dir: &std::path::Path, delay: Duration) -> ExportConfig {
    ExportConfig {
        output_path: dir.join("random_zmienne.csv"),
        client: BdlClientConfig::new().with_page_delay(delay),
        ..ExportConfig::default()
    }
}

/// Five full pages of ten, then an empty page.
fn fifty_variable_backend() -> (FakeBackend, Vec<Variable>) {
    let mut backend = FakeBackend::new();
    let mut all = Vec::new();
    for (n, prefix) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        let vars = page(prefix, 10);
        backend = backend.with_page(u32::try_from(n + 1).unwrap(), CannedResponse::items(&vars));
        all.extend(vars);
    }
    (backend.with_default(CannedResponse::empty()), all)
}

#[tokio::test]
async fn test_export_samples_forty_of_fifty() {
    let dir = tempdir().unwrap();
    let config = export_config(dir.path(), Duration::ZERO);
    let (backend, population) = fifty_variable_backend();
    let observer = backend.clone();
    let client = BdlClient::with_backend(&config.client, backend)
        .unwrap()
        .with_page_observer(print_page_progress);

    let summary = run_export(&client, &config, &mut rand::rng()).await.unwrap();

    assert_eq!(summary.fetched, 50);
    assert_eq!(summary.written, 40);
    assert_eq!(observer.request_count(), 6);

    let mut reader = csv::Reader::from_path(&config.output_path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["variable_id", "nazwa_zmiennej"]);
    let rows: Vec<Variable> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            Variable::new(&r[0], &r[1])
        })
        .collect();
    assert_eq!(rows.len(), 40);
    let unique: HashSet<&Variable> = rows.iter().collect();
    assert_eq!(unique.len(), 40);
    assert!(rows.iter().all(|v| population.contains(v)));
}

#[tokio::test]
async fn test_export_with_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let config = export_config(dir.path(), Duration::ZERO);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let (backend, _) = fifty_variable_backend();
        let client = BdlClient::with_backend(&config.client, backend).unwrap();
        run_export(&client, &config, &mut StdRng::seed_from_u64(3183))
            .await
            .unwrap();
        outputs.push(std::fs::read(&config.output_path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn test_export_fails_when_population_too_small() {
    let dir = tempdir().unwrap();
    let config = export_config(dir.path(), Duration::ZERO);
    let backend = FakeBackend::new()
        .with_page(1, CannedResponse::items(&page("A", 10)))
        .with_page(2, CannedResponse::items(&page("B", 10)))
        .with_page(3, CannedResponse::items(&page("C", 10)))
        .with_default(CannedResponse::empty());
    let client = BdlClient::with_backend(&config.client, backend).unwrap();

    let result = run_export(&client, &config, &mut rand::rng()).await;

    match result {
        Err(ExportError::InsufficientPopulation {
            available,
            required,
        }) => {
            assert_eq!(available, 30);
            assert_eq!(required, 40);
        }
        other => panic!("expected InsufficientPopulation, got {other:?}"),
    }
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn test_export_server_error_leaves_existing_file_untouched() {
    let dir = tempdir().unwrap();
    let config = export_config(dir.path(), Duration::ZERO);
    std::fs::write(&config.output_path, "variable_id,nazwa_zmiennej\nOLD,Stary\n").unwrap();

    let backend = FakeBackend::new()
        .with_page(1, CannedResponse::items(&page("A", 10)))
        .with_page(2, CannedResponse::Status(500))
        .with_default(CannedResponse::items(&page("Z", 10)));
    let observer = backend.clone();
    let client = BdlClient::with_backend(&config.client, backend).unwrap();

    let result = run_export(&client, &config, &mut rand::rng()).await;

    assert!(matches!(
        result,
        Err(ExportError::Fetch(BdlError::ApiRequestFailed {
            status: 500,
            ..
        }))
    ));
    assert_eq!(observer.request_count(), 2);
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "variable_id,nazwa_zmiennej\nOLD,Stary\n"
    );
}

#[tokio::test]
async fn test_export_malformed_xml_aborts() {
    let dir = tempdir().unwrap();
    let config = export_config(dir.path(), Duration::ZERO);
    let backend = FakeBackend::new()
        .with_page(1, CannedResponse::Xml("<variables><results><item>".to_string()));
    let client = BdlClient::with_backend(&config.client, backend).unwrap();

    let result = run_export(&client, &config, &mut rand::rng()).await;

    assert!(matches!(result, Err(ExportError::Fetch(_))));
    assert!(!config.output_path.exists());
}

#[tokio::test(start_paused = true)]
async fn test_export_waits_after_every_request() {
    let dir = tempdir().unwrap();
    let config = ExportConfig {
        sample_size: 25,
        ..export_config(dir.path(), Duration::from_millis(500))
    };
    let backend = FakeBackend::new()
        .with_page(1, CannedResponse::items(&page("A", 10)))
        .with_page(2, CannedResponse::items(&page("B", 10)))
        .with_page(3, CannedResponse::items(&page("C", 5)))
        .with_default(CannedResponse::empty());
    let observer = backend.clone();
    let client = BdlClient::with_backend(&config.client, backend).unwrap();

    let start = tokio::time::Instant::now();
    let summary = run_export(&client, &config, &mut rand::rng()).await.unwrap();

    assert_eq!(summary.fetched, 25);
    assert_eq!(observer.request_count(), 4);
    assert_eq!(start.elapsed(), Duration::from_millis(2000));
}
