use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::scenario::{NewScenario, Scenario, ScenarioSummary};
use crate::services::store_config::{DOCUMENT_FILE_NAME, StoreConfig};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize scenario document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write temporary document {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to replace scenario document {path}: {source}")]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One element of the on-disk `scenarios` array. Entries that do not have
/// the scenario shape are carried through rewrites untouched. Those with a
/// string `id` still show up in `list` and can be deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Scenario(Scenario),
    Unrecognized(Value),
}

impl StoredEntry {
    fn as_scenario(&self) -> Option<&Scenario> {
        match self {
            StoredEntry::Scenario(scenario) => Some(scenario),
            StoredEntry::Unrecognized(_) => None,
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            StoredEntry::Scenario(scenario) => Some(&scenario.id),
            StoredEntry::Unrecognized(value) => value.get("id").and_then(Value::as_str),
        }
    }

    fn summary(&self) -> Option<ScenarioSummary> {
        match self {
            StoredEntry::Scenario(scenario) => Some(scenario.summary()),
            StoredEntry::Unrecognized(value) => {
                let text = |key: &str| {
                    value
                        .get(key)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                Some(ScenarioSummary {
                    id: self.id()?.to_string(),
                    scenario_name: text("scenario_name"),
                    created_at: text("created_at"),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScenarioDocument {
    scenarios: Vec<StoredEntry>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ScenarioDocument {
    fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter().filter_map(StoredEntry::as_scenario)
    }

    fn unrecognized_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|entry| entry.as_scenario().is_none())
            .count()
    }
}

/// File-backed scenario collection.
///
/// The whole collection lives in one pretty-printed JSON document. Every
/// commit writes a temporary sibling file, syncs it, and renames it over the
/// canonical path, so readers only ever see a complete document.
///
/// Committing operations go through `write_queue`, a fair (FIFO) async mutex
/// held across the full read-modify-write cycle: a commit completes before
/// the next queued one starts, and a failed commit releases the queue for the
/// next caller. The queue is per instance; two stores pointed at the same
/// directory are not serialized against each other.
pub struct ScenarioStore {
    config: StoreConfig,
    write_queue: Mutex<()>,
}

impl ScenarioStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            write_queue: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn document_path(&self) -> PathBuf {
        self.config.document_path()
    }

    /// Appends a scenario, assigning an id when none was supplied and
    /// stamping `created_at` with the current time.
    pub async fn create(&self, new_scenario: NewScenario) -> Result<Scenario, StoreError> {
        let _queued = self.write_queue.lock().await;
        self.ensure_document_queued().await?;

        let mut document = self.read_document().await;
        let scenario = Scenario {
            id: new_scenario
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            scenario_name: new_scenario.scenario_name,
            inputs: new_scenario.inputs,
            results: new_scenario.results,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            extra: Map::new(),
        };
        document.scenarios.push(StoredEntry::Scenario(scenario.clone()));
        self.commit(&document).await?;

        info!(id = %scenario.id, name = %scenario.scenario_name, "scenario created");
        Ok(scenario)
    }

    /// Summaries, most recent first. Entries sharing a timestamp keep their
    /// document order.
    pub async fn list(&self) -> Result<Vec<ScenarioSummary>, StoreError> {
        let document = self.load().await?;
        let mut summaries: Vec<ScenarioSummary> = document
            .scenarios
            .iter()
            .filter_map(StoredEntry::summary)
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Scenario>, StoreError> {
        let document = self.load().await?;
        Ok(document.scenarios().find(|scenario| scenario.id == id).cloned())
    }

    /// Removes every entry with `id`, including ones without the full
    /// scenario shape. Returns `false`, without touching the document, when
    /// nothing matched.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _queued = self.write_queue.lock().await;
        self.ensure_document_queued().await?;

        let mut document = self.read_document().await;
        let before = document.scenarios.len();
        document
            .scenarios
            .retain(|entry| entry.id() != Some(id));
        let removed = document.scenarios.len() != before;
        if removed {
            self.commit(&document).await?;
            info!(%id, "scenario deleted");
        } else {
            debug!(%id, "delete requested for unknown scenario");
        }
        Ok(removed)
    }

    async fn load(&self) -> Result<ScenarioDocument, StoreError> {
        if !self.document_exists().await {
            let _queued = self.write_queue.lock().await;
            self.ensure_document_queued().await?;
        }
        Ok(self.read_document().await)
    }

    /// Must only be called while holding `write_queue`.
    async fn ensure_document_queued(&self) -> Result<(), StoreError> {
        let data_dir = &self.config.data_dir;
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::CreateDir {
                path: data_dir.clone(),
                source,
            })?;
        if self.document_exists().await {
            return Ok(());
        }

        info!(path = %self.document_path().display(), "initializing empty scenario document");
        self.commit(&ScenarioDocument::default()).await
    }

    async fn document_exists(&self) -> bool {
        // An inaccessible path counts as present and is not initialized here.
        // Reads of it fall back to empty, so the next commit still replaces it.
        tokio::fs::try_exists(self.document_path())
            .await
            .unwrap_or(true)
    }

    /// Loads the current document. Unreadable, unparsable, or structurally
    /// invalid content is treated as an empty document.
    async fn read_document(&self) -> ScenarioDocument {
        let path = self.document_path();
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(error) => {
                warn!(path = %path.display(), %error, "scenario document unreadable, treating as empty");
                return ScenarioDocument::default();
            }
        };

        match serde_json::from_str::<ScenarioDocument>(&contents) {
            Ok(document) => {
                let unrecognized = document.unrecognized_count();
                if unrecognized > 0 {
                    warn!(path = %path.display(), unrecognized, "entries without the scenario shape are kept as-is");
                }
                document
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "scenario document invalid, treating as empty");
                ScenarioDocument::default()
            }
        }
    }

    async fn commit(&self, document: &ScenarioDocument) -> Result<(), StoreError> {
        let path = self.document_path();
        let temp_path = self
            .config
            .data_dir
            .join(format!("{DOCUMENT_FILE_NAME}.{}.tmp", Uuid::new_v4()));
        let contents = serde_json::to_string_pretty(document)?;

        if let Err(source) = write_synced(&temp_path, contents.as_bytes()).await {
            discard_temp_file(&temp_path).await;
            return Err(StoreError::Write {
                path: temp_path,
                source,
            });
        }
        if let Err(source) = tokio::fs::rename(&temp_path, &path).await {
            discard_temp_file(&temp_path).await;
            return Err(StoreError::Replace { path, source });
        }

        debug!(path = %path.display(), entries = document.scenarios.len(), "scenario document committed");
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

async fn discard_temp_file(path: &Path) {
    if let Err(error) = tokio::fs::remove_file(path).await {
        debug!(path = %path.display(), %error, "temporary document not removed");
    }
}
