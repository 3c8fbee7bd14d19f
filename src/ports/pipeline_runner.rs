//! Pipeline runner port definition.

use std::fmt;

use crate::domain::{AppError, PipelineInvocation};

/// How the runner process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineExit {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl PipelineExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for PipelineExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("termination by signal"),
        }
    }
}

/// Port for running the external pipeline to completion.
pub trait PipelineRunner {
    /// Block until the process exits. `Err` only when it could not be started.
    fn run(&self, invocation: &PipelineInvocation) -> Result<PipelineExit, AppError>;
}
