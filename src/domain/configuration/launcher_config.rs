//! Launcher configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration for provisioning and launching, loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Storage dispatcher service.
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    /// Execution metadata lookup.
    #[serde(default)]
    pub execution: ExecutionApiConfig,
    /// Pipeline runtime layout and invocation.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Log upload destination.
    #[serde(default)]
    pub logs: LogUploadConfig,
    /// Working directory size measurement.
    #[serde(default)]
    pub usage: UsageConfig,
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.dispatcher.validate()?;
        self.execution.validate()?;
        self.runtime.validate()?;
        self.logs.validate()?;
        self.usage.validate()?;
        Ok(())
    }
}

/// Storage dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Base URL; `/provision-storage` and `/report-storage` are appended.
    #[serde(default = "default_dispatcher_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_dispatcher_timeout")]
    pub timeout_secs: u64,
    /// Size of the shared volume to request.
    #[serde(default = "default_storage_gib")]
    pub storage_gib: u32,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            url: default_dispatcher_url(),
            timeout_secs: default_dispatcher_timeout(),
            storage_gib: default_storage_gib(),
        }
    }
}

impl DispatcherConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("dispatcher.timeout_secs must be greater than 0"));
        }
        if self.storage_gib == 0 {
            return Err(AppError::config_error("dispatcher.storage_gib must be greater than 0"));
        }
        Ok(())
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        join_url(&self.url, path)
    }
}

fn default_dispatcher_url() -> Url {
    Url::parse("http://nf-dispatcher-service.flyte.svc.cluster.local")
        .expect("Default dispatcher URL must be valid")
}

fn default_dispatcher_timeout() -> u64 {
    30
}

fn default_storage_gib() -> u32 {
    100
}

/// Execution metadata API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionApiConfig {
    /// GraphQL endpoint used to look up the execution's display name.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_execution_timeout")]
    pub timeout_secs: u64,
}

impl Default for ExecutionApiConfig {
    fn default() -> Self {
        Self { graphql_url: default_graphql_url(), timeout_secs: default_execution_timeout() }
    }
}

impl ExecutionApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("execution.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_graphql_url() -> Url {
    Url::parse("https://vacuole.latch.bio/graphql").expect("Default GraphQL URL must be valid")
}

fn default_execution_timeout() -> u64 {
    10
}

/// Pipeline runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Tree copied into the working directory.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,
    /// Shared working directory on the provisioned volume.
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
    /// Pipeline runner executable.
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
    /// Pipeline script, relative to the working directory.
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
    /// Profiles passed as a comma-separated `-profile` value.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<String>,
    /// Runner config file passed with `-c`.
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Pass `-resume` to reuse cached task results.
    #[serde(default = "default_true")]
    pub resume: bool,
    /// Entry names skipped at every depth while staging.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
    /// `NXF_HOME` for the runner.
    #[serde(default = "default_nxf_home")]
    pub nxf_home: PathBuf,
    /// `NXF_OPTS` JVM options for the runner.
    #[serde(default = "default_nxf_opts")]
    pub nxf_opts: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            work_dir: default_work_dir(),
            executable: default_executable(),
            entrypoint: default_entrypoint(),
            profiles: default_profiles(),
            config_file: default_config_file(),
            resume: default_true(),
            excluded: default_excluded(),
            nxf_home: default_nxf_home(),
            nxf_opts: default_nxf_opts(),
        }
    }
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_root.as_os_str().is_empty() {
            return Err(AppError::config_error("runtime.source_root must not be empty"));
        }
        if self.work_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("runtime.work_dir must not be empty"));
        }
        // Copying a tree into itself never terminates.
        if let Ok(rest) = self.work_dir.strip_prefix(&self.source_root) {
            let skipped = rest.components().next().is_some_and(|first| {
                self.excluded.iter().any(|name| first.as_os_str() == name.as_str())
            });
            if !skipped {
                return Err(AppError::config_error(
                    "runtime.work_dir must not be inside runtime.source_root unless excluded",
                ));
            }
        }
        if self.executable.as_os_str().is_empty() {
            return Err(AppError::config_error("runtime.executable must not be empty"));
        }
        if self.entrypoint.trim().is_empty() {
            return Err(AppError::config_error("runtime.entrypoint must not be empty"));
        }
        if self.profiles.is_empty() || self.profiles.iter().any(|p| p.trim().is_empty()) {
            return Err(AppError::config_error(
                "runtime.profiles must list non-empty profile names",
            ));
        }
        if self.config_file.trim().is_empty() {
            return Err(AppError::config_error("runtime.config_file must not be empty"));
        }
        Ok(())
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("/root")
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("/nf-workdir")
}

fn default_executable() -> PathBuf {
    PathBuf::from("/root/nextflow")
}

fn default_entrypoint() -> String {
    "main.nf".to_string()
}

fn default_profiles() -> Vec<String> {
    vec!["docker".to_string()]
}

fn default_config_file() -> String {
    "latch.config".to_string()
}

fn default_true() -> bool {
    true
}

fn default_excluded() -> Vec<String> {
    [
        "latch",
        ".latch",
        "nextflow",
        ".nextflow",
        "work",
        "results",
        "miniconda",
        "anaconda3",
        "mambaforge",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_nxf_home() -> PathBuf {
    PathBuf::from("/root/.nextflow")
}

fn default_nxf_opts() -> String {
    "-Xms2048M -Xmx8G -XX:ActiveProcessorCount=4".to_string()
}

/// Log upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogUploadConfig {
    /// Remote base directory for uploaded logs.
    #[serde(default = "default_log_base")]
    pub base: String,
    /// Pipeline segment of the log path.
    #[serde(default = "default_pipeline_name")]
    pub pipeline_name: String,
    /// CLI used as `<program> cp <local> <remote>`.
    #[serde(default = "default_upload_program")]
    pub upload_program: PathBuf,
}

impl Default for LogUploadConfig {
    fn default() -> Self {
        Self {
            base: default_log_base(),
            pipeline_name: default_pipeline_name(),
            upload_program: default_upload_program(),
        }
    }
}

impl LogUploadConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base.trim().is_empty() {
            return Err(AppError::config_error("logs.base must not be empty"));
        }
        if self.pipeline_name.trim().is_empty() {
            return Err(AppError::config_error("logs.pipeline_name must not be empty"));
        }
        if self.upload_program.as_os_str().is_empty() {
            return Err(AppError::config_error("logs.upload_program must not be empty"));
        }
        Ok(())
    }
}

fn default_log_base() -> String {
    "latch:///your_log_dir".to_string()
}

fn default_pipeline_name() -> String {
    "nf_nf_core_rnafusion".to_string()
}

fn default_upload_program() -> PathBuf {
    PathBuf::from("latch")
}

/// Working directory size measurement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageConfig {
    /// Hard limit on the `du` run.
    #[serde(default = "default_usage_timeout")]
    pub timeout_secs: u64,
    /// `du` executable.
    #[serde(default = "default_du_program")]
    pub program: PathBuf,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self { timeout_secs: default_usage_timeout(), program: default_du_program() }
    }
}

impl UsageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("usage.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_usage_timeout() -> u64 {
    5 * 60
}

fn default_du_program() -> PathBuf {
    PathBuf::from("du")
}

fn join_url(base: &Url, path: &str) -> Result<Url, AppError> {
    if base.cannot_be_a_base() {
        return Err(AppError::config_error(format!("'{}' cannot be used as a base URL", base)));
    }
    let mut joined = base.clone();
    let trimmed = base.path().trim_end_matches('/');
    joined.set_path(&format!("{}/{}", trimmed, path.trim_start_matches('/')));
    Ok(joined)
}
