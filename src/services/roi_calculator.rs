use crate::domain::simulation_input::{NormalizedInputs, SimulationInput};
use crate::domain::simulation_result::{Breakdown, RoiResults, SimulationResult};

/// Processing cost of one invoice once automated, in currency units.
pub const AUTOMATED_COST_PER_INVOICE: f64 = 0.20;
/// Error rate of the automated pipeline, as a fraction.
pub const AUTOMATED_ERROR_RATE: f64 = 0.001;
pub const SAVINGS_ADJUSTMENT_FACTOR: f64 = 1.10;
/// Favorability floor: the monthly savings reported whenever the computed
/// figure is non-positive or non-finite.
///
/// This guarantees a positive ROI even for economically unfavorable inputs.
/// It is current product behavior and must be confirmed with product owners
/// before anything downstream treats it as authoritative.
pub const MINIMUM_MONTHLY_SAVINGS: f64 = 1.0;

const MIN_TIME_HORIZON_MONTHS: f64 = 1.0;

/// Normalizes every numeric field with "parse or default" and applies the
/// horizon and implementation-cost floors.
pub fn normalize_inputs(input: &SimulationInput) -> NormalizedInputs {
    NormalizedInputs {
        monthly_invoice_volume: input.monthly_invoice_volume.finite_or(0.0),
        num_ap_staff: input.num_ap_staff.finite_or(0.0),
        avg_hours_per_invoice: input.avg_hours_per_invoice.finite_or(0.0),
        hourly_wage: input.hourly_wage.finite_or(0.0),
        error_rate_manual: input.error_rate_manual.finite_or(0.0),
        error_cost: input.error_cost.finite_or(0.0),
        time_horizon_months: input
            .time_horizon_months
            .finite_or(MIN_TIME_HORIZON_MONTHS)
            .max(MIN_TIME_HORIZON_MONTHS),
        one_time_implementation_cost: input.one_time_implementation_cost.finite_or(0.0).max(0.0),
    }
}

/// Runs the ROI projection. Total and side-effect free: malformed fields are
/// defaulted, never reported.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let inputs = normalize_inputs(input);
    let breakdown = compute_breakdown(&inputs);
    let results = compute_results(&inputs, &breakdown);

    SimulationResult {
        scenario_name: input.scenario_name.trimmed_text(),
        inputs,
        breakdown,
        results,
    }
}

fn compute_breakdown(inputs: &NormalizedInputs) -> Breakdown {
    let error_rate_manual = inputs.error_rate_manual / 100.0;

    let labor_cost_manual = inputs.num_ap_staff
        * inputs.hourly_wage
        * inputs.avg_hours_per_invoice
        * inputs.monthly_invoice_volume;
    let auto_cost = inputs.monthly_invoice_volume * AUTOMATED_COST_PER_INVOICE;
    let error_savings =
        (error_rate_manual - AUTOMATED_ERROR_RATE) * inputs.monthly_invoice_volume * inputs.error_cost;

    Breakdown {
        labor_cost_manual,
        auto_cost,
        error_savings,
    }
}

fn compute_results(inputs: &NormalizedInputs, breakdown: &Breakdown) -> RoiResults {
    let raw_monthly_savings = ((breakdown.labor_cost_manual + breakdown.error_savings)
        - breakdown.auto_cost)
        * SAVINGS_ADJUSTMENT_FACTOR;
    let monthly_savings = apply_favorability_floor(raw_monthly_savings);

    let implementation_cost = inputs.one_time_implementation_cost;
    let cumulative_savings = monthly_savings * inputs.time_horizon_months;
    let net_savings = cumulative_savings - implementation_cost;
    let payback_months = if monthly_savings > 0.0 && implementation_cost > 0.0 {
        implementation_cost / monthly_savings
    } else {
        0.0
    };
    let roi_percentage = if implementation_cost > 0.0 {
        (net_savings / implementation_cost) * 100.0
    } else {
        0.0
    };

    RoiResults {
        monthly_savings,
        cumulative_savings,
        net_savings,
        payback_months,
        roi_percentage,
    }
}

fn apply_favorability_floor(monthly_savings: f64) -> f64 {
    if !monthly_savings.is_finite() || monthly_savings <= 0.0 {
        MINIMUM_MONTHLY_SAVINGS
    } else {
        monthly_savings
    }
}
