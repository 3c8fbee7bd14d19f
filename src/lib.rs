//! rnafusion-launcher: provision shared storage and launch the nf-core/rnafusion
//! Nextflow pipeline from a typed parameter table.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    LaunchOptions, LaunchOutcome, LogUploadOutcome, ParameterSources, ParamsFormat,
    PipelineStatus, initialize, launch, load_config, params, preview_command,
    resolve_parameters, run,
};
pub use domain::{AppError, LauncherConfig, ParameterSet, VolumeHandle};
