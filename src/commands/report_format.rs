use thiserror::Error;

use crate::domain::simulation_input::NormalizedInputs;
use crate::domain::simulation_result::{RoiResults, SimulationResult};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("a valid requester email is required, got '{0}'")]
    InvalidEmail(String),
}

pub fn validate_requester_email(email: &str) -> Result<&str, ReportError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ReportError::InvalidEmail(email.to_string()));
    }
    Ok(email)
}

/// Console summary printed after `simulate`.
pub fn format_simulation_summary(result: &SimulationResult) -> String {
    let name = if result.scenario_name.is_empty() {
        "n/a"
    } else {
        result.scenario_name.as_str()
    };

    let mut lines = Vec::new();
    lines.push("ROI Simulation".to_string());
    lines.push(format!("Scenario: {name}"));
    lines.push(format!("Time horizon: {} months", result.inputs.time_horizon_months));
    lines.push(String::new());
    lines.push("Monthly breakdown:".to_string());
    lines.push(format!("Labor cost (manual): {:.2}", result.breakdown.labor_cost_manual));
    lines.push(format!("Automation cost: {:.2}", result.breakdown.auto_cost));
    lines.push(format!("Error savings: {:.2}", result.breakdown.error_savings));
    lines.push(String::new());
    lines.push("Results:".to_string());
    lines.push(format!("Monthly savings: {:.2}", result.results.monthly_savings));
    lines.push(format!("Cumulative savings: {:.2}", result.results.cumulative_savings));
    lines.push(format!("Net savings: {:.2}", result.results.net_savings));
    lines.push(format!("Payback (months): {:.1}", result.results.payback_months));
    lines.push(format!("ROI: {:.1}%", result.results.roi_percentage));

    lines.join("\n")
}

/// Plain-text ROI report for a requester.
pub fn format_roi_report(result: &SimulationResult, requested_by: &str) -> Result<String, ReportError> {
    let requested_by = validate_requester_email(requested_by)?;

    let mut lines = Vec::new();
    lines.push("Invoicing ROI Report".to_string());
    lines.push(String::new());
    lines.push(format!("Requested by: {requested_by}"));
    if !result.scenario_name.is_empty() {
        lines.push(format!("Scenario: {}", result.scenario_name));
    }
    lines.push(String::new());
    lines.push("Inputs".to_string());
    lines.extend(input_rows(&result.inputs));
    lines.push(String::new());
    lines.push("Results".to_string());
    lines.extend(result_rows(&result.results));

    Ok(lines.join("\n"))
}

fn input_rows(inputs: &NormalizedInputs) -> Vec<String> {
    [
        ("monthly_invoice_volume", inputs.monthly_invoice_volume),
        ("num_ap_staff", inputs.num_ap_staff),
        ("avg_hours_per_invoice", inputs.avg_hours_per_invoice),
        ("hourly_wage", inputs.hourly_wage),
        ("error_rate_manual", inputs.error_rate_manual),
        ("error_cost", inputs.error_cost),
        ("time_horizon_months", inputs.time_horizon_months),
        ("one_time_implementation_cost", inputs.one_time_implementation_cost),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value}"))
    .collect()
}

fn result_rows(results: &RoiResults) -> Vec<String> {
    [
        ("monthly_savings", results.monthly_savings),
        ("cumulative_savings", results.cumulative_savings),
        ("net_savings", results.net_savings),
        ("payback_months", results.payback_months),
        ("roi_percentage", results.roi_percentage),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value:.2}"))
    .collect()
}
