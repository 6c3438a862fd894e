use thiserror::Error;

use crate::commands::report_format::ReportError;
use crate::services::input_yaml::InputYamlError;
use crate::services::scenario_store::StoreError;
use crate::services::store_config::StoreConfigError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] StoreConfigError),
    #[error("failed to load simulation input: {0}")]
    Input(#[from] InputYamlError),
    #[error("scenario store failure: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("scenario_name is required")]
    MissingScenarioName,
    #[error("failed to serialize output: {0}")]
    Serialize(String),
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for CommandError {
    fn from(error: serde_json::Error) -> Self {
        CommandError::Serialize(error.to_string())
    }
}

impl From<serde_yaml::Error> for CommandError {
    fn from(error: serde_yaml::Error) -> Self {
        CommandError::Serialize(error.to_string())
    }
}
