pub mod configuration;
pub mod error;
pub mod execution;
pub mod flags;
pub mod invocation;
pub mod parameters;
pub mod remote_path;
pub mod run_name;

pub use configuration::{
    DispatcherConfig, ExecutionApiConfig, LauncherConfig, LogUploadConfig, RuntimeConfig,
    UsageConfig,
};
pub use error::AppError;
pub use execution::{EXECUTION_TOKEN_VAR, ExecutionToken, VolumeHandle};
pub use flags::build_flags;
pub use invocation::PipelineInvocation;
pub use parameters::{
    ParameterDescriptor, ParameterInput, ParameterKind, ParameterSet, ParameterValue,
};
pub use remote_path::{RemotePath, log_destination};
pub use run_name::RunName;
