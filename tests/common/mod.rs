#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use mathviz::dataset::DatasetStore;
use mathviz::AppState;

/// The two-record scenario dataset used throughout the filter tests.
pub const TWO_RECORDS: &str = r#"{
    "1": {"question": "2+2?", "category": "Math"},
    "2": {"question": "Capital of France?", "category": "Geo"}
}"#;

/// Writes a dataset file into a fresh temp dir. The dir handle must stay
/// alive for as long as the file is read.
pub fn write_dataset(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("questions.json");
    std::fs::write(&path, contents).expect("failed to write dataset file");
    (dir, path)
}

pub fn app_state(path: PathBuf) -> AppState {
    AppState {
        dataset: Arc::new(DatasetStore::new(path)),
    }
}
