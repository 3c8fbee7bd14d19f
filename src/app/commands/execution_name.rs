//! Resolution of the human-readable execution name.

use crate::domain::ExecutionToken;
use crate::ports::ExecutionLookup;

/// Pick the execution name: an explicit value wins, otherwise ask the platform.
///
/// Lookup failures are logged and yield `None`.
pub fn resolve(
    lookup: &dyn ExecutionLookup,
    explicit: Option<&str>,
    token: Option<&ExecutionToken>,
) -> Option<String> {
    if let Some(name) = explicit.map(str::trim).filter(|name| !name.is_empty()) {
        return Some(name.to_string());
    }

    let Some(token) = token else {
        log::debug!("No execution token available; execution name unknown");
        return None;
    };

    match lookup.execution_name(token) {
        Ok(name) => name.filter(|name| !name.trim().is_empty()),
        Err(e) => {
            log::warn!("Failed to look up execution name: {}", e);
            None
        }
    }
}
