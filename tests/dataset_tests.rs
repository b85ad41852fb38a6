// Dataset parsing and loading tests

use latency_api::dataset::{DatasetStore, load_dataset, parse_dataset};
use latency_api::error::ApiError;
use latency_api::models::TelemetryRecord;

const VALID_DATASET: &str = r#"[
    {"region": "us-east", "latency_ms": 100, "uptime_pct": 99.9, "service": "api"},
    {"region": "us-east", "latency_ms": 200.5, "uptime_pct": 99.5}
]"#;

#[test]
fn parses_records_and_ignores_extra_fields() {
    let records = parse_dataset(VALID_DATASET.as_bytes()).unwrap();
    assert_eq!(
        records,
        vec![
            TelemetryRecord::new("us-east", 100.0, 99.9),
            TelemetryRecord::new("us-east", 200.5, 99.5),
        ]
    );
}

#[test]
fn empty_array_is_an_empty_dataset() {
    assert!(parse_dataset(b"[]").unwrap().is_empty());
}

#[test]
fn missing_field_is_malformed_record_with_index() {
    let body = r#"[
        {"region": "a", "latency_ms": 1, "uptime_pct": 99},
        {"region": "b", "uptime_pct": 99}
    ]"#;
    match parse_dataset(body.as_bytes()) {
        Err(ApiError::MalformedRecord { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("latency_ms"), "{}", reason);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn non_numeric_field_is_malformed_record() {
    let body = r#"[{"region": "a", "latency_ms": "fast", "uptime_pct": 99}]"#;
    let err = parse_dataset(body.as_bytes()).unwrap_err();
    assert!(matches!(err, ApiError::MalformedRecord { index: 0, .. }));
}

#[test]
fn non_array_top_level_is_unavailable() {
    let err = parse_dataset(br#"{"region": "a"}"#).unwrap_err();
    assert!(matches!(err, ApiError::DatasetUnavailable(_)));
}

#[test]
fn invalid_json_is_unavailable() {
    let err = parse_dataset(b"not json").unwrap_err();
    assert!(matches!(err, ApiError::DatasetUnavailable(_)));
}

#[tokio::test]
async fn load_missing_file_is_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_dataset(&dir.path().join("missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DatasetUnavailable(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[tokio::test]
async fn cached_store_reads_file_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, VALID_DATASET).unwrap();

    let store = DatasetStore::new(&path, false);
    assert_eq!(store.get().await.unwrap().len(), 2);

    std::fs::write(&path, "[]").unwrap();
    assert_eq!(store.get().await.unwrap().len(), 2);
}

#[tokio::test]
async fn reloading_store_sees_file_changes() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, VALID_DATASET).unwrap();

    let store = DatasetStore::new(&path, true);
    assert_eq!(store.get().await.unwrap().len(), 2);

    std::fs::write(&path, "[]").unwrap();
    assert!(store.get().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_load_is_retried() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("late.json");

    let store = DatasetStore::new(&path, false);
    assert!(store.get().await.is_err());

    std::fs::write(&path, VALID_DATASET).unwrap();
    assert_eq!(store.get().await.unwrap().len(), 2);
}

#[tokio::test]
async fn in_memory_store_never_touches_disk() {
    let store = DatasetStore::from_records(vec![TelemetryRecord::new("x", 1.0, 2.0)]);
    assert_eq!(store.path().as_os_str(), "");
    assert_eq!(store.get().await.unwrap()[0].region, "x");
}

#[tokio::test]
async fn bundled_dataset_loads() {
    let records = load_dataset(std::path::Path::new("data/q-vercel-latency.json"))
        .await
        .unwrap();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| !r.region.is_empty()));
}
