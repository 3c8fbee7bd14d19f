use std::fmt;

use chrono::{DateTime, Utc};

/// Run-specific subpath appended to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunName(String);

impl RunName {
    /// Use the execution name when known, otherwise a UTC timestamp.
    pub fn for_execution(execution_name: Option<&str>, now: DateTime<Utc>) -> Self {
        match execution_name.map(sanitize).filter(|name| !name.is_empty()) {
            Some(name) => Self(name),
            None => Self(format!("run-{}", now.format("%Y%m%d-%H%M%S"))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Path separators would nest the output; whitespace breaks the printed command.
fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '-' } else { c })
        .collect()
}
