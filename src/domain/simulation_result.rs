use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::simulation_input::NormalizedInputs;

/// Monthly cost components behind the savings figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    /// Negative when the manual error rate is below the automated one.
    pub error_savings: f64,
}

/// Result figures. Inputs are always finite and monthly savings is floored
/// at a positive value, so the only non-finite values these fields can take
/// are positive overflows. JSON stores those as `null`, which reads back as
/// `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResults {
    #[serde(deserialize_with = "null_as_infinity")]
    pub monthly_savings: f64,
    #[serde(deserialize_with = "null_as_infinity")]
    pub cumulative_savings: f64,
    #[serde(deserialize_with = "null_as_infinity")]
    pub net_savings: f64,
    #[serde(deserialize_with = "null_as_infinity")]
    pub payback_months: f64,
    #[serde(deserialize_with = "null_as_infinity")]
    pub roi_percentage: f64,
}

fn null_as_infinity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenario_name: String,
    pub inputs: NormalizedInputs,
    pub breakdown: Breakdown,
    pub results: RoiResults,
}
