mod fake_disk_usage;
mod fake_execution_lookup;
mod fake_log_uploader;
mod fake_provisioner;
mod fake_runner;
mod fake_stager;
mod fake_usage_reporter;
mod scripts;

pub use fake_disk_usage::FakeDiskUsage;
pub use fake_execution_lookup::FakeExecutionLookup;
pub use fake_log_uploader::FakeLogUploader;
pub use fake_provisioner::FakeProvisioner;
pub use fake_runner::FakeRunner;
pub use fake_stager::FakeStager;
pub use fake_usage_reporter::FakeUsageReporter;
pub use scripts::write_script;
