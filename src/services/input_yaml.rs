use std::io;
use std::path::Path;

use thiserror::Error;

use crate::domain::simulation_input::SimulationInput;

#[derive(Error, Debug)]
pub enum InputYamlError {
    #[error("failed to read input file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse input file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Loads a simulation request from a YAML or JSON file.
pub async fn load_simulation_input<P: AsRef<Path>>(path: P) -> Result<SimulationInput, InputYamlError> {
    let contents = tokio::fs::read_to_string(path).await?;
    deserialize_simulation_input(&contents)
}

/// JSON documents are accepted as YAML flow mappings.
pub fn deserialize_simulation_input(contents: &str) -> Result<SimulationInput, InputYamlError> {
    Ok(serde_yaml::from_str(contents)?)
}
