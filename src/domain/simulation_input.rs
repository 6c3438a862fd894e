use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single caller-supplied field, kept exactly as received.
///
/// Callers may send numbers, numeric strings, or garbage. Interpretation
/// happens at normalization time so that deserializing an input object never
/// fails because one field is malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawField(pub Option<Value>);

impl RawField {
    pub fn missing() -> Self {
        Self(None)
    }

    pub fn number(value: f64) -> Self {
        Self(serde_json::Number::from_f64(value).map(Value::Number))
    }

    pub fn text(value: &str) -> Self {
        Self(Some(Value::String(value.to_string())))
    }

    /// Parses the field as a finite number, falling back to `default`.
    ///
    /// Strings are trimmed before parsing. Missing values, non-numeric
    /// strings, non-finite results and non-scalar values all yield `default`.
    pub fn finite_or(&self, default: f64) -> f64 {
        let parsed = match &self.0 {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            _ => None,
        };
        parsed.filter(|value| value.is_finite()).unwrap_or(default)
    }

    /// Trimmed textual value; numbers are rendered, everything else is empty.
    pub fn trimmed_text(&self) -> String {
        match &self.0 {
            Some(Value::String(text)) => text.trim().to_string(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        }
    }
}

/// Raw simulation request as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInput {
    pub scenario_name: RawField,
    pub monthly_invoice_volume: RawField,
    pub num_ap_staff: RawField,
    pub avg_hours_per_invoice: RawField,
    pub hourly_wage: RawField,
    pub error_rate_manual: RawField,
    pub error_cost: RawField,
    pub time_horizon_months: RawField,
    pub one_time_implementation_cost: RawField,
}

impl SimulationInput {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Inputs after "parse or default" normalization and clamping.
///
/// `error_rate_manual` stays in percent, as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInputs {
    pub monthly_invoice_volume: f64,
    pub num_ap_staff: f64,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    pub error_rate_manual: f64,
    pub error_cost: f64,
    pub time_horizon_months: f64,
    pub one_time_implementation_cost: f64,
}

impl From<&NormalizedInputs> for SimulationInput {
    fn from(inputs: &NormalizedInputs) -> Self {
        Self {
            scenario_name: RawField::missing(),
            monthly_invoice_volume: RawField::number(inputs.monthly_invoice_volume),
            num_ap_staff: RawField::number(inputs.num_ap_staff),
            avg_hours_per_invoice: RawField::number(inputs.avg_hours_per_invoice),
            hourly_wage: RawField::number(inputs.hourly_wage),
            error_rate_manual: RawField::number(inputs.error_rate_manual),
            error_cost: RawField::number(inputs.error_cost),
            time_horizon_months: RawField::number(inputs.time_horizon_months),
            one_time_implementation_cost: RawField::number(inputs.one_time_implementation_cost),
        }
    }
}
