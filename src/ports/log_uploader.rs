use std::path::Path;

use crate::domain::{AppError, RemotePath};

/// Port for copying a local file into remote storage.
pub trait LogUploader {
    fn upload(&self, local: &Path, remote: &RemotePath) -> Result<(), AppError>;
}
