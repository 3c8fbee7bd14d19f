use std::path::Path;

use crate::domain::AppError;

/// Counts from one staging pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageSummary {
    pub files: u64,
    pub bytes: u64,
    pub skipped_links: u64,
}

/// Port for materializing the pipeline working directory.
pub trait WorkdirStager {
    /// Copy `source` into `target`, skipping entries named in `excluded`.
    fn stage(&self, source: &Path, target: &Path, excluded: &[String])
    -> Result<StageSummary, AppError>;
}
