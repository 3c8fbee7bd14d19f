//! Staging of the pipeline working directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{StageSummary, WorkdirStager};

/// Stages the working directory with plain recursive copies.
#[derive(Debug, Clone, Default)]
pub struct FilesystemWorkdirStager;

impl FilesystemWorkdirStager {
    pub fn new() -> Self {
        Self
    }
}

impl WorkdirStager for FilesystemWorkdirStager {
    fn stage(
        &self,
        source: &Path,
        target: &Path,
        excluded: &[String],
    ) -> Result<StageSummary, AppError> {
        stage_workdir(source, target, excluded)
    }
}

/// Copy `source` into `target`, merging with whatever is already there.
///
/// Entries whose name is in `excluded` are skipped at every depth. Symlinks are
/// followed; dangling ones are skipped.
pub fn stage_workdir(
    source: &Path,
    target: &Path,
    excluded: &[String],
) -> Result<StageSummary, AppError> {
    if !source.is_dir() {
        return Err(AppError::Staging {
            path: source.display().to_string(),
            details: "source is not a directory".to_string(),
        });
    }

    let mut summary = StageSummary::default();
    copy_tree(source, target, excluded, &mut summary)?;
    Ok(summary)
}

fn copy_tree(
    source: &Path,
    target: &Path,
    excluded: &[String],
    summary: &mut StageSummary,
) -> Result<(), AppError> {
    fs::create_dir_all(target).map_err(|e| staging_error(target, e))?;

    let entries = fs::read_dir(source).map_err(|e| staging_error(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| staging_error(source, e))?;
        let name = entry.file_name();
        if name.to_str().is_some_and(|name| excluded.iter().any(|skip| skip == name)) {
            continue;
        }

        let from = entry.path();
        let to = target.join(&name);

        // fs::metadata follows links, so a dangling link surfaces as NotFound.
        let metadata = match fs::metadata(&from) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound && is_symlink(&from) => {
                log::debug!("Skipping dangling symlink {}", from.display());
                summary.skipped_links += 1;
                continue;
            }
            Err(e) => return Err(staging_error(&from, e)),
        };

        if metadata.is_dir() {
            copy_tree(&from, &to, excluded, summary)?;
        } else {
            summary.bytes += fs::copy(&from, &to).map_err(|e| staging_error(&from, e))?;
            summary.files += 1;
        }
    }

    Ok(())
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

fn staging_error(path: &Path, err: io::Error) -> AppError {
    AppError::Staging { path: path.display().to_string(), details: err.to_string() }
}
