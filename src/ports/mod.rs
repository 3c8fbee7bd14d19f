mod disk_usage;
mod execution_lookup;
mod log_uploader;
mod pipeline_runner;
mod storage_provisioner;
mod usage_reporter;
mod workdir_stager;

pub use disk_usage::{DiskUsageProbe, UsageMeasurementError};
pub use execution_lookup::ExecutionLookup;
pub use log_uploader::LogUploader;
pub use pipeline_runner::{PipelineExit, PipelineRunner};
pub use storage_provisioner::StorageProvisioner;
pub use usage_reporter::UsageReporter;
pub use workdir_stager::{StageSummary, WorkdirStager};
