use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use invoice_roi::commands::base_commands::{CliArgs, Commands, StoreArgs};
use invoice_roi::commands::command_error::CommandError;
use invoice_roi::commands::report_cmd::report_command;
use invoice_roi::commands::scenario_cmds::{delete_command, get_command, list_command, save_command};
use invoice_roi::commands::simulate_cmd::simulate_command;
use invoice_roi::logging::init_tracing;
use invoice_roi::services::scenario_store::ScenarioStore;
use invoice_roi::services::store_config::StoreConfig;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    let outcome = match args.command {
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        cmd @ Commands::Simulate { .. } => simulate_command(cmd)
            .await
            .map_err(|e| ("simulate", e)),
        cmd => run_store_command(&args.store, cmd).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err((action, e)) => {
            eprintln!("Failed to {action}: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_store_command(
    store_args: &StoreArgs,
    cmd: Commands,
) -> Result<(), (&'static str, CommandError)> {
    let config = StoreConfig::resolve(store_args.config.as_deref(), store_args.data_dir.as_deref())
        .map_err(|e| ("load configuration", CommandError::from(e)))?;
    let store = ScenarioStore::new(config);

    match cmd {
        cmd @ Commands::Save { .. } => save_command(&store, cmd).await.map_err(|e| ("save scenario", e)),
        cmd @ Commands::List { .. } => list_command(&store, cmd).await.map_err(|e| ("list scenarios", e)),
        cmd @ Commands::Get { .. } => get_command(&store, cmd).await.map_err(|e| ("get scenario", e)),
        cmd @ Commands::Delete { .. } => delete_command(&store, cmd)
            .await
            .map_err(|e| ("delete scenario", e)),
        cmd @ Commands::Report { .. } => report_command(&store, cmd)
            .await
            .map_err(|e| ("generate report", e)),
        Commands::Simulate { .. } | Commands::Completions { .. } => Ok(()),
    }
}
