use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{DiskUsageProbe, UsageMeasurementError};

#[derive(Clone)]
pub struct FakeDiskUsage {
    pub measured: Arc<Mutex<Vec<(PathBuf, Duration)>>>,
    bytes: Option<u64>,
}

impl FakeDiskUsage {
    pub fn reporting(bytes: u64) -> Self {
        Self { measured: Arc::default(), bytes: Some(bytes) }
    }

    pub fn timing_out() -> Self {
        Self { measured: Arc::default(), bytes: None }
    }
}

impl DiskUsageProbe for FakeDiskUsage {
    fn measure(&self, dir: &Path, timeout: Duration) -> Result<u64, UsageMeasurementError> {
        self.measured.lock().unwrap().push((dir.to_path_buf(), timeout));
        self.bytes.ok_or(UsageMeasurementError::TimedOut(timeout))
    }
}
