//! Identity of the current workflow execution and the storage it owns.

use std::fmt;

/// Environment variable carrying the execution identity token.
pub const EXECUTION_TOKEN_VAR: &str = "FLYTE_INTERNAL_EXECUTION_ID";

/// Opaque token identifying the running execution to platform services.
#[derive(Clone, PartialEq, Eq)]
pub struct ExecutionToken(String);

impl ExecutionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from [`EXECUTION_TOKEN_VAR`]; blank values count as absent.
    pub fn from_env() -> Option<Self> {
        std::env::var(EXECUTION_TOKEN_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Latch-Execution-Token {}", self.0)
    }
}

impl fmt::Debug for ExecutionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExecutionToken([REDACTED])")
    }
}

/// Name of a provisioned shared storage volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeHandle(String);

impl VolumeHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VolumeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
