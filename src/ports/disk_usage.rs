use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Why a size measurement produced no number.
#[derive(Debug, Error)]
pub enum UsageMeasurementError {
    #[error("Operation timed out after {} seconds.", .0.as_secs())]
    TimedOut(Duration),

    #[error("{0}")]
    Failed(String),
}

/// Port for measuring the on-disk size of a directory tree.
pub trait DiskUsageProbe {
    fn measure(&self, dir: &Path, timeout: Duration) -> Result<u64, UsageMeasurementError>;
}
