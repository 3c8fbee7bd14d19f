use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{StageSummary, WorkdirStager};

/// Creates the target directory without copying anything, or fails on demand.
#[derive(Clone, Default)]
pub struct FakeStager {
    pub staged: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    fail: bool,
}

impl FakeStager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl WorkdirStager for FakeStager {
    fn stage(
        &self,
        source: &Path,
        target: &Path,
        _excluded: &[String],
    ) -> Result<StageSummary, AppError> {
        self.staged.lock().unwrap().push((source.to_path_buf(), target.to_path_buf()));
        if self.fail {
            return Err(AppError::Staging {
                path: source.display().to_string(),
                details: "Permission denied".into(),
            });
        }
        fs::create_dir_all(target)?;
        Ok(StageSummary::default())
    }
}
