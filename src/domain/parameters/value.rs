use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use super::Literal;

/// Location of a path-like parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    /// URI with a scheme (`latch:///…`, `s3://…`), passed through verbatim.
    Remote(String),
    /// Filesystem path, always absolute once resolved.
    Local(PathBuf),
}

impl PathValue {
    /// Classify `raw`; relative local paths are anchored at `base_dir`.
    pub fn resolve(raw: &str, base_dir: &Path) -> Self {
        let trimmed = raw.trim();
        if has_scheme(trimmed) {
            return PathValue::Remote(trimmed.to_string());
        }

        let path = Path::new(trimmed);
        if path.is_absolute() {
            PathValue::Local(path.to_path_buf())
        } else {
            PathValue::Local(base_dir.join(path))
        }
    }

    /// The string handed to the pipeline.
    pub fn location(&self) -> String {
        match self {
            PathValue::Remote(uri) => uri.clone(),
            PathValue::Local(path) => path.display().to_string(),
        }
    }
}

fn has_scheme(raw: &str) -> bool {
    // A single-letter scheme is a Windows drive, not a URI.
    match Url::parse(raw) {
        Ok(url) => url.scheme().len() > 1,
        Err(_) => false,
    }
}

/// A resolved, typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Path(PathValue),
}

impl ParameterValue {
    /// Render as a flag argument. Booleans never take an argument.
    pub fn render(&self) -> Option<String> {
        match self {
            ParameterValue::Bool(_) => None,
            ParameterValue::Int(value) => Some(value.to_string()),
            ParameterValue::Str(value) => Some(value.clone()),
            ParameterValue::Path(path) => Some(path.location()),
        }
    }
}

impl From<Literal> for ParameterValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(value) => ParameterValue::Bool(value),
            Literal::Int(value) => ParameterValue::Int(value),
            Literal::Str(value) => ParameterValue::Str(value.to_string()),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Bool(value) => write!(f, "{}", value),
            ParameterValue::Int(value) => write!(f, "{}", value),
            ParameterValue::Str(value) => write!(f, "{}", value),
            ParameterValue::Path(path) => write!(f, "{}", path.location()),
        }
    }
}
