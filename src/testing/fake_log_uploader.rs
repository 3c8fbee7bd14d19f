use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, RemotePath};
use crate::ports::LogUploader;

#[derive(Clone, Default)]
pub struct FakeLogUploader {
    pub uploads: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail: bool,
}

impl FakeLogUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn uploaded(&self) -> Vec<(PathBuf, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

impl LogUploader for FakeLogUploader {
    fn upload(&self, local: &Path, remote: &RemotePath) -> Result<(), AppError> {
        self.uploads.lock().unwrap().push((local.to_path_buf(), remote.as_str().to_string()));
        if self.fail {
            return Err(AppError::ExternalToolError {
                tool: "latch".into(),
                error: "permission denied".into(),
            });
        }
        Ok(())
    }
}
