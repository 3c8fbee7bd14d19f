//! Execution metadata port definition.

use crate::domain::{AppError, ExecutionToken};

/// Port for resolving the human-readable execution name.
pub trait ExecutionLookup {
    /// `Ok(None)` when the platform knows the execution but reports no name.
    fn execution_name(&self, token: &ExecutionToken) -> Result<Option<String>, AppError>;
}
