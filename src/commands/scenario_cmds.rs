use crate::commands::base_commands::Commands;
use crate::commands::command_error::CommandError;
use crate::domain::scenario::{NewScenario, ScenarioSummary};
use crate::services::input_yaml::load_simulation_input;
use crate::services::roi_calculator::simulate;
use crate::services::scenario_store::ScenarioStore;

pub async fn save_command(store: &ScenarioStore, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Save { input, name } = cmd {
        let simulation_input = load_simulation_input(&input).await?;
        let result = simulate(&simulation_input);
        let scenario_name = name
            .map(|name| name.trim().to_string())
            .unwrap_or(result.scenario_name);
        if scenario_name.is_empty() {
            return Err(CommandError::MissingScenarioName);
        }

        let saved = store
            .create(NewScenario::new(scenario_name, result.inputs, result.results))
            .await?;
        println!("Scenario saved with id {}", saved.id);
    }
    Ok(())
}

pub async fn list_command(store: &ScenarioStore, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::List { json } = cmd {
        let summaries = store.list().await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            println!("{}", format_scenario_table(&summaries));
        }
    }
    Ok(())
}

pub async fn get_command(store: &ScenarioStore, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Get { id } = cmd {
        let scenario = store
            .get(&id)
            .await?
            .ok_or(CommandError::ScenarioNotFound(id))?;
        println!("{}", serde_json::to_string_pretty(&scenario)?);
    }
    Ok(())
}

pub async fn delete_command(store: &ScenarioStore, cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Delete { id } = cmd {
        if !store.delete(&id).await? {
            return Err(CommandError::ScenarioNotFound(id));
        }
        println!("Scenario {id} deleted");
    }
    Ok(())
}

fn format_scenario_table(summaries: &[ScenarioSummary]) -> String {
    if summaries.is_empty() {
        return "No saved scenarios".to_string();
    }

    let mut lines = Vec::with_capacity(summaries.len() + 2);
    lines.push("Id | Scenario | Created at".to_string());
    lines.push("---|----------|-----------".to_string());
    for summary in summaries {
        lines.push(format!(
            "{} | {} | {}",
            summary.id, summary.scenario_name, summary.created_at
        ));
    }
    lines.join("\n")
}
