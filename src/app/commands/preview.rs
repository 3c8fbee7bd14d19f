//! Dry run: the runner invocation a launch would use.

use chrono::{DateTime, Utc};

use crate::domain::{
    ParameterSet, PipelineInvocation, RunName, RuntimeConfig, VolumeHandle, build_flags,
};

/// Build the invocation without staging or running anything.
pub fn execute(
    runtime: &RuntimeConfig,
    volume: &VolumeHandle,
    parameters: &ParameterSet,
    execution_name: Option<&str>,
    now: DateTime<Utc>,
) -> PipelineInvocation {
    let run_name = RunName::for_execution(execution_name, now);
    PipelineInvocation::new(runtime, volume, build_flags(parameters, &run_name))
}
