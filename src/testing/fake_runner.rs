use std::fs;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PipelineInvocation};
use crate::ports::{PipelineExit, PipelineRunner};

/// Records invocations and optionally leaves a `.nextflow.log` in the working directory.
#[derive(Clone)]
pub struct FakeRunner {
    pub invocations: Arc<Mutex<Vec<PipelineInvocation>>>,
    exit_code: Option<i32>,
    writes_log: bool,
    spawn_fails: bool,
}

impl FakeRunner {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            invocations: Arc::default(),
            exit_code: Some(code),
            writes_log: true,
            spawn_fails: false,
        }
    }

    pub fn without_log(mut self) -> Self {
        self.writes_log = false;
        self
    }

    pub fn failing_to_spawn() -> Self {
        Self { spawn_fails: true, writes_log: false, ..Self::exiting_with(0) }
    }
}

impl PipelineRunner for FakeRunner {
    fn run(&self, invocation: &PipelineInvocation) -> Result<PipelineExit, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        if self.spawn_fails {
            return Err(AppError::ExternalToolError {
                tool: invocation.program.display().to_string(),
                error: "No such file or directory".into(),
            });
        }
        if self.writes_log {
            fs::write(invocation.cwd.join(".nextflow.log"), "Nextflow log")?;
        }
        Ok(PipelineExit { code: self.exit_code })
    }
}
