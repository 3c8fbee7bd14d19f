use std::fmt;

/// Destination in remote storage, e.g. `latch:///your_log_dir/pipeline/run/nextflow.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath(String);

impl RemotePath {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append segments with exactly one `/` between each.
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = self.0.clone();
        for segment in segments {
            let segment = segment.as_ref().trim_matches('/');
            if segment.is_empty() {
                continue;
            }
            if !joined.ends_with('/') {
                joined.push('/');
            }
            joined.push_str(segment);
        }
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<base>/<pipeline>/<execution>/nextflow.log`.
pub fn log_destination(base: &str, pipeline_name: &str, execution_name: &str) -> RemotePath {
    RemotePath::new(base).join([pipeline_name, execution_name, "nextflow.log"])
}
