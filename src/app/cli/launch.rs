use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, LaunchOptions, LaunchOutcome, ParameterSources, PipelineStatus};
use crate::domain::{AppError, LauncherConfig, VolumeHandle};

/// Parameter input shared by `launch`, `run` and `command`.
#[derive(Args, Debug, Clone)]
pub struct ParameterArgs {
    /// JSON or TOML file of pipeline parameters
    #[arg(long)]
    pub params_file: Option<PathBuf>,
    /// Set a parameter, overriding the params file (repeatable; empty VALUE unsets)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,
    /// Execution name used for the log path and run directory
    #[arg(long)]
    pub execution_name: Option<String>,
}

impl From<ParameterArgs> for LaunchOptions {
    fn from(args: ParameterArgs) -> Self {
        LaunchOptions {
            parameters: ParameterSources {
                params_file: args.params_file,
                assignments: args.assignments,
            },
            execution_name: args.execution_name,
        }
    }
}

pub fn run_initialize(config: &LauncherConfig) -> Result<(), AppError> {
    let volume = api::initialize(config)?;
    println!("{}", volume);
    Ok(())
}

pub fn run_launch(
    config: &LauncherConfig,
    volume: &str,
    args: ParameterArgs,
) -> Result<i32, AppError> {
    let outcome = api::launch(config, &VolumeHandle::new(volume), &args.into())?;
    finish(outcome)
}

pub fn run_full(config: &LauncherConfig, args: ParameterArgs) -> Result<i32, AppError> {
    let outcome = api::run(config, &args.into())?;
    finish(outcome)
}

pub fn run_command_preview(
    config: &LauncherConfig,
    volume: &str,
    args: ParameterArgs,
) -> Result<(), AppError> {
    let command_line = api::preview_command(config, &VolumeHandle::new(volume), &args.into())?;
    println!("{}", command_line);
    Ok(())
}

fn finish(outcome: LaunchOutcome) -> Result<i32, AppError> {
    match outcome.status {
        PipelineStatus::Succeeded => Ok(outcome.exit_code()),
        PipelineStatus::Failed(reason) => Err(AppError::PipelineFailed(reason)),
    }
}
