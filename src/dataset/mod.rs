use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

pub mod categories;
pub mod filter;

pub use filter::{FilterSelection, SampleCount};

/// One question entry as it appears in the dataset file. All fields except
/// the question text are optional; the exporter omits whatever a source row
/// did not have.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Assigned at load time from the record's key in the source mapping.
    #[serde(skip)]
    pub id: String,
    pub question: String,
    pub category: Option<String>,
    pub analysis: Option<String>,
    pub hint: Option<String>,
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(default)]
    pub analysis_image: Vec<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    pub answer: Option<String>,
}

/// The full mapping of identifiers to records for the current session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Parses a dataset from file contents. Accepts plain JSON
    /// (`{"1": {...}, ...}`) as well as the legacy script form
    /// (`test_data = {...};`), whose assignment prefix and trailing
    /// semicolon are stripped before parsing.
    pub fn parse(raw: &str) -> Result<Self, DatasetError> {
        let raw = raw.trim();
        let json = if raw.starts_with('{') {
            raw
        } else {
            match raw.split_once('=') {
                Some((_, rest)) => rest.trim().trim_end_matches(';').trim_end(),
                None => raw,
            }
        };

        let mapping: BTreeMap<String, Record> = serde_json::from_str(json)?;

        let records = mapping
            .into_iter()
            .map(|(id, mut record)| {
                record.id = id;
                record
            })
            .collect();

        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("could not read dataset file: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

struct Loaded {
    generation: u64,
    dataset: Arc<Dataset>,
}

/// Owns the dataset file path and the most recently loaded dataset.
///
/// Each [`reload`](Self::reload) call is stamped with a generation number;
/// a load that completes after a newer load has already published is
/// discarded, so overlapping filter cycles can never roll the published
/// dataset back to an older file state.
pub struct DatasetStore {
    path: PathBuf,
    next_generation: AtomicU64,
    current: RwLock<Option<Loaded>>,
}

impl DatasetStore {
    pub fn new(path: PathBuf) -> Self {
        DatasetStore {
            path,
            next_generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads and parses the dataset file, publishing the result unless a
    /// newer reload has published in the meantime. Returns the freshest
    /// dataset either way.
    pub async fn reload(&self) -> Result<Arc<Dataset>, DatasetError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let dataset = Arc::new(Dataset::parse(&raw)?);

        Ok(self.publish(generation, dataset).await)
    }

    /// Publishes a completed load. A load that finishes after a newer
    /// generation has already published is discarded, and its caller gets
    /// the newer dataset instead.
    async fn publish(&self, generation: u64, dataset: Arc<Dataset>) -> Arc<Dataset> {
        let mut current = self.current.write().await;
        match &*current {
            Some(loaded) if loaded.generation > generation => {
                tracing::debug!(
                    generation,
                    newest = loaded.generation,
                    "discarding stale dataset load"
                );
                loaded.dataset.clone()
            }
            _ => {
                tracing::debug!(generation, records = dataset.len(), "dataset loaded");
                *current = Some(Loaded {
                    generation,
                    dataset: dataset.clone(),
                });
                dataset
            }
        }
    }

    /// The most recently published dataset, or `None` before the first
    /// successful load. An empty dataset is `Some`, which keeps "no
    /// matches" distinguishable from "not yet loaded".
    pub async fn current(&self) -> Option<Arc<Dataset>> {
        self.current.read().await.as_ref().map(|l| l.dataset.clone())
    }
}
