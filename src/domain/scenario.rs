use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::simulation_input::NormalizedInputs;
use crate::domain::simulation_result::RoiResults;

/// A persisted, immutable snapshot of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub scenario_name: String,
    pub inputs: NormalizedInputs,
    pub results: RoiResults,
    /// ISO-8601 UTC timestamp, compared as a string when ordering.
    pub created_at: String,
    /// Keys this crate does not know about, kept so rewrites preserve them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scenario {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id.clone(),
            scenario_name: self.scenario_name.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub scenario_name: String,
    pub created_at: String,
}

/// Request to persist a scenario. The store assigns `created_at` and, when
/// `id` is `None`, a fresh identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScenario {
    pub id: Option<String>,
    pub scenario_name: String,
    pub inputs: NormalizedInputs,
    pub results: RoiResults,
}

impl NewScenario {
    pub fn new(scenario_name: impl Into<String>, inputs: NormalizedInputs, results: RoiResults) -> Self {
        Self {
            id: None,
            scenario_name: scenario_name.into(),
            inputs,
            results,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
