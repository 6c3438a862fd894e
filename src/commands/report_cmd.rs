use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::{format_roi_report, validate_requester_email};
use crate::domain::simulation_input::{RawField, SimulationInput};
use crate::services::input_yaml::load_simulation_input;
use crate::services::roi_calculator::simulate;
use crate::services::scenario_store::ScenarioStore;

pub async fn report_command(store: &ScenarioStore, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Report {
        input,
        scenario,
        email,
        output,
    } = cmd
    {
        validate_requester_email(&email)?;

        let simulation_input = match (input, scenario) {
            (Some(input), _) => load_simulation_input(&input).await?,
            (None, Some(id)) => saved_scenario_input(store, id).await?,
            (None, None) => SimulationInput::new(),
        };
        let report = format_roi_report(&simulate(&simulation_input), &email)?;

        tokio::fs::write(&output, report)
            .await
            .map_err(|source| CommandError::WriteOutput {
                path: output.clone(),
                source,
            })?;
        println!("ROI report written to {output}");
    }
    Ok(())
}

/// Rebuilds the engine input from a saved scenario's normalized inputs.
async fn saved_scenario_input(store: &ScenarioStore, id: String) -> Result<SimulationInput, CommandError> {
    let scenario = store
        .get(&id)
        .await?
        .ok_or(CommandError::ScenarioNotFound(id))?;
    let mut input = SimulationInput::from(&scenario.inputs);
    input.scenario_name = RawField::text(&scenario.scenario_name);
    Ok(input)
}
