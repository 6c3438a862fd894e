use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(flatten)]
    pub store: StoreArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Directory holding scenarios.json (overrides the config file)
    #[arg(long, global = true, env = "INVOICE_ROI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    /// Optional YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an ROI projection from an input file
    Simulate {
        /// Input YAML or JSON file
        #[arg(short, long)]
        input: String,
        /// Optional file receiving the full simulation result
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Simulate and persist a named scenario
    Save {
        /// Input YAML or JSON file
        #[arg(short, long)]
        input: String,
        /// Scenario name (defaults to the input's scenario_name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List saved scenarios, newest first
    List {
        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a saved scenario as JSON
    Get {
        /// Scenario id
        id: String,
    },
    /// Delete a saved scenario
    Delete {
        /// Scenario id
        id: String,
    },
    /// Write a plain-text ROI report
    Report {
        /// Input YAML or JSON file
        #[arg(short, long, conflicts_with = "scenario", required_unless_present = "scenario")]
        input: Option<String>,
        /// Id of a saved scenario to report on
        #[arg(short, long)]
        scenario: Option<String>,
        /// Email of the person requesting the report
        #[arg(short, long)]
        email: String,
        /// Output text file
        #[arg(short, long, default_value = "roi_report.txt")]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
