//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapters::du_command::DuCommandProbe;
use crate::adapters::execution_lookup_http::HttpExecutionLookup;
use crate::adapters::nextflow_command::NextflowCommandRunner;
use crate::adapters::provisioning_http::HttpStorageProvisioner;
use crate::adapters::upload_command::CommandLogUploader;
use crate::adapters::usage_reporter_http::HttpUsageReporter;
use crate::adapters::workdir_filesystem::FilesystemWorkdirStager;
use crate::app::AppContext;
use crate::app::commands;
use crate::domain::configuration::load_params_file;
use crate::domain::{ExecutionToken, LauncherConfig, ParameterInput, ParameterSet, VolumeHandle};

pub use crate::app::commands::launch::{LaunchOutcome, LogUploadOutcome, PipelineStatus};
pub use crate::app::commands::params::ParamsFormat;
pub use crate::domain::AppError;
pub use crate::domain::configuration::load_config;

/// Where pipeline parameters come from.
#[derive(Debug, Clone, Default)]
pub struct ParameterSources {
    /// JSON or TOML object of `name = value`.
    pub params_file: Option<PathBuf>,
    /// `NAME=VALUE` overrides applied after the file.
    pub assignments: Vec<String>,
}

/// Options shared by `launch` and `run`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub parameters: ParameterSources,
    /// Pins the execution name instead of looking it up.
    pub execution_name: Option<String>,
}

/// Create an `AppContext` backed by the real adapters.
pub fn create_context(config: &LauncherConfig) -> Result<AppContext, AppError> {
    Ok(AppContext::new(
        Box::new(HttpStorageProvisioner::new(&config.dispatcher)?),
        Box::new(HttpExecutionLookup::new(&config.execution)?),
        Box::new(FilesystemWorkdirStager::new()),
        Box::new(NextflowCommandRunner::new()),
        Box::new(CommandLogUploader::new(config.logs.upload_program.clone())),
        Box::new(DuCommandProbe::with_program(config.usage.program.clone())),
        Box::new(HttpUsageReporter::new(&config.dispatcher)?),
    ))
}

/// Resolve parameters from a params file and overrides.
///
/// Relative local paths are anchored at the current directory.
pub fn resolve_parameters(sources: &ParameterSources) -> Result<ParameterSet, AppError> {
    resolve_parameters_at(sources, &std::env::current_dir()?)
}

/// Resolve parameters, anchoring relative local paths at `base_dir`.
pub fn resolve_parameters_at(
    sources: &ParameterSources,
    base_dir: &Path,
) -> Result<ParameterSet, AppError> {
    let mut input = ParameterInput::new();
    if let Some(path) = &sources.params_file {
        input.extend_from_object(load_params_file(path)?);
    }
    for assignment in &sources.assignments {
        input.push_assignment(assignment)?;
    }
    ParameterSet::resolve(&input, base_dir)
}

/// Provision the shared volume for the execution named in the environment.
pub fn initialize(config: &LauncherConfig) -> Result<VolumeHandle, AppError> {
    let ctx = create_context(config)?;
    commands::initialize::execute(&ctx, &config.dispatcher, ExecutionToken::from_env().as_ref())
}

/// Launch the pipeline on an existing volume.
pub fn launch(
    config: &LauncherConfig,
    volume: &VolumeHandle,
    options: &LaunchOptions,
) -> Result<LaunchOutcome, AppError> {
    let parameters = resolve_parameters(&options.parameters)?;
    let ctx = create_context(config)?;
    Ok(launch_with(&ctx, config, volume, &parameters, options.execution_name.as_deref()))
}

/// Provision a volume, then launch the pipeline on it.
///
/// Parameters are resolved first so bad input fails before any request is made.
pub fn run(config: &LauncherConfig, options: &LaunchOptions) -> Result<LaunchOutcome, AppError> {
    let parameters = resolve_parameters(&options.parameters)?;
    let ctx = create_context(config)?;
    let token = ExecutionToken::from_env();

    let volume = commands::initialize::execute(&ctx, &config.dispatcher, token.as_ref())?;
    Ok(launch_with(&ctx, config, &volume, &parameters, options.execution_name.as_deref()))
}

fn launch_with(
    ctx: &AppContext,
    config: &LauncherConfig,
    volume: &VolumeHandle,
    parameters: &ParameterSet,
    explicit_name: Option<&str>,
) -> LaunchOutcome {
    let token = ExecutionToken::from_env();
    let execution_name =
        commands::execution_name::resolve(ctx.lookup(), explicit_name, token.as_ref());

    let request = commands::launch::LaunchRequest {
        volume,
        parameters,
        token: token.as_ref(),
        execution_name,
        started_at: Utc::now(),
    };
    commands::launch::execute(ctx, config, &request)
}

/// Render the parameter table.
pub fn params(format: ParamsFormat) -> Result<String, AppError> {
    commands::params::execute(format)
}

/// The command line a launch would run, without touching the filesystem or network.
///
/// Only an explicit execution name is used; otherwise the run name is timestamped.
pub fn preview_command(
    config: &LauncherConfig,
    volume: &VolumeHandle,
    options: &LaunchOptions,
) -> Result<String, AppError> {
    let parameters = resolve_parameters(&options.parameters)?;
    let invocation = commands::preview::execute(
        &config.runtime,
        volume,
        &parameters,
        options.execution_name.as_deref(),
        Utc::now(),
    );
    Ok(invocation.command_line())
}
