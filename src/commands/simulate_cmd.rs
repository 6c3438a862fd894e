use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_simulation_summary;
use crate::domain::simulation_result::SimulationResult;
use crate::services::input_yaml::load_simulation_input;
use crate::services::roi_calculator::simulate;

pub async fn simulate_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Simulate {
        input,
        output,
        format,
    } = cmd
    {
        let simulation_input = load_simulation_input(&input).await?;
        let result = simulate(&simulation_input);
        println!("{}", format_simulation_summary(&result));

        if let Some(output) = output {
            let contents = serialize_result(&result, format)?;
            tokio::fs::write(&output, contents)
                .await
                .map_err(|source| CommandError::WriteOutput {
                    path: output.clone(),
                    source,
                })?;
            println!("Simulation result written to {output}");
        }
    }
    Ok(())
}

fn serialize_result(result: &SimulationResult, format: OutputFormat) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
    })
}
