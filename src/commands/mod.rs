pub mod base_commands;
pub mod command_error;
pub mod report_cmd;
pub mod report_format;
pub mod scenario_cmds;
pub mod simulate_cmd;
