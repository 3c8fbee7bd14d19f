//! Pipeline launch: stage, run, then upload the log and report usage.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::app::AppContext;
use crate::domain::{
    ExecutionToken, LauncherConfig, LogUploadConfig, ParameterSet, PipelineInvocation, RemotePath,
    RunName, VolumeHandle, build_flags, log_destination,
};

const NEXTFLOW_LOG: &str = ".nextflow.log";
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Inputs for a single launch.
#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    pub volume: &'a VolumeHandle,
    pub parameters: &'a ParameterSet,
    pub token: Option<&'a ExecutionToken>,
    /// Already resolved execution name, if any.
    pub execution_name: Option<String>,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStatus {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogUploadOutcome {
    Uploaded(RemotePath),
    NoLogFile,
    SkippedNoExecutionName,
    Failed(String),
}

/// What happened during a launch. Only `status` decides the exit code.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub run_name: RunName,
    pub status: PipelineStatus,
    pub log_upload: LogUploadOutcome,
    pub workdir_bytes: Option<u64>,
}

impl LaunchOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == PipelineStatus::Succeeded
    }

    pub fn exit_code(&self) -> i32 {
        if self.succeeded() { 0 } else { 1 }
    }
}

/// Run the pipeline once.
///
/// Staging and runner failures are captured in the outcome; log upload and
/// usage reporting run regardless and never change the status.
pub fn execute(
    ctx: &AppContext,
    config: &LauncherConfig,
    request: &LaunchRequest,
) -> LaunchOutcome {
    let run_name = RunName::for_execution(request.execution_name.as_deref(), request.started_at);
    let runtime = &config.runtime;

    let staged = ctx.stager().stage(&runtime.source_root, &runtime.work_dir, &runtime.excluded);
    let status = match staged {
        Ok(summary) => {
            log::debug!(
                "Staged {} files ({} bytes) into {}, skipped {} dangling links",
                summary.files,
                summary.bytes,
                runtime.work_dir.display(),
                summary.skipped_links
            );
            let flags = build_flags(request.parameters, &run_name);
            let invocation = PipelineInvocation::new(runtime, request.volume, flags);
            run_pipeline(ctx, &invocation)
        }
        Err(e) => {
            println!("{}", e);
            PipelineStatus::Failed(e.to_string())
        }
    };
    println!();

    let log_upload =
        upload_log(ctx, &config.logs, &runtime.work_dir, request.execution_name.as_deref());
    let workdir_bytes = report_usage(
        ctx,
        &runtime.work_dir,
        Duration::from_secs(config.usage.timeout_secs),
        request.token,
    );

    LaunchOutcome { run_name, status, log_upload, workdir_bytes }
}

fn run_pipeline(ctx: &AppContext, invocation: &PipelineInvocation) -> PipelineStatus {
    println!("Launching Nextflow Runtime");
    println!("{}", invocation.command_line());
    println!();

    match ctx.runner().run(invocation) {
        Ok(exit) if exit.success() => PipelineStatus::Succeeded,
        Ok(exit) => PipelineStatus::Failed(format!("Nextflow exited with {}", exit)),
        Err(e) => {
            println!("{}", e);
            PipelineStatus::Failed(e.to_string())
        }
    }
}

fn upload_log(
    ctx: &AppContext,
    logs: &LogUploadConfig,
    work_dir: &Path,
    execution_name: Option<&str>,
) -> LogUploadOutcome {
    let local = work_dir.join(NEXTFLOW_LOG);
    if !local.is_file() {
        log::debug!("No {} in {}", NEXTFLOW_LOG, work_dir.display());
        return LogUploadOutcome::NoLogFile;
    }

    let Some(name) = execution_name else {
        println!("Skipping logs upload, failed to get execution name");
        return LogUploadOutcome::SkippedNoExecutionName;
    };

    let remote = log_destination(&logs.base, &logs.pipeline_name, name);
    println!("Uploading {} to {}", NEXTFLOW_LOG, remote);
    match ctx.uploader().upload(&local, &remote) {
        Ok(()) => LogUploadOutcome::Uploaded(remote),
        Err(e) => {
            println!("Failed to upload {}: {}", NEXTFLOW_LOG, e);
            LogUploadOutcome::Failed(e.to_string())
        }
    }
}

fn report_usage(
    ctx: &AppContext,
    work_dir: &Path,
    timeout: Duration,
    token: Option<&ExecutionToken>,
) -> Option<u64> {
    let bytes = match ctx.disk_usage().measure(work_dir, timeout) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Failed to compute storage size: {}", e);
            return None;
        }
    };

    println!("Computed size of working directory: {:.2} GiB", bytes as f64 / GIB);
    if let Err(e) = ctx.reporter().report_used_storage(token, bytes) {
        println!("Failed to report storage usage: {}", e);
    }
    Some(bytes)
}
