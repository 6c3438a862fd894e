use crate::domain::simulation_input::{RawField, SimulationInput};
use crate::services::scenario_store::ScenarioStore;
use crate::services::store_config::StoreConfig;

/// The worked example used throughout the docs: 1000 invoices/month,
/// two AP staff, 12 month horizon, 5000 implementation cost.
pub fn reference_input() -> SimulationInput {
    SimulationInput {
        scenario_name: RawField::text("Reference"),
        monthly_invoice_volume: RawField::number(1000.0),
        num_ap_staff: RawField::number(2.0),
        avg_hours_per_invoice: RawField::number(0.17),
        hourly_wage: RawField::number(25.0),
        error_rate_manual: RawField::number(0.5),
        error_cost: RawField::number(100.0),
        time_horizon_months: RawField::number(12.0),
        one_time_implementation_cost: RawField::number(5000.0),
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub fn store_in(dir: &std::path::Path) -> ScenarioStore {
    ScenarioStore::new(StoreConfig::new(dir))
}
