use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, RemotePath};
use crate::ports::LogUploader;

/// Uploads through the platform CLI as `<program> cp <local> <remote>`.
#[derive(Debug, Clone)]
pub struct CommandLogUploader {
    program: PathBuf,
}

impl CommandLogUploader {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl LogUploader for CommandLogUploader {
    fn upload(&self, local: &Path, remote: &RemotePath) -> Result<(), AppError> {
        let tool = self.program.display().to_string();

        let output = Command::new(&self.program)
            .arg("cp")
            .arg(local)
            .arg(remote.as_str())
            .output()
            .map_err(|e| AppError::ExternalToolError {
                tool: tool.clone(),
                error: format!("Failed to execute upload CLI: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ExternalToolError {
                tool,
                error: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}
