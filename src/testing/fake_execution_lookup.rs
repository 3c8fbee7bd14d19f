use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ExecutionToken};
use crate::ports::ExecutionLookup;

#[derive(Clone, Default)]
pub struct FakeExecutionLookup {
    pub calls: Arc<Mutex<usize>>,
    name: Option<String>,
    fail: bool,
}

impl FakeExecutionLookup {
    pub fn named(name: &str) -> Self {
        Self { name: Some(name.to_string()), ..Self::default() }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl ExecutionLookup for FakeExecutionLookup {
    fn execution_name(&self, _token: &ExecutionToken) -> Result<Option<String>, AppError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::ServiceError {
                service: "execution API".into(),
                message: "connection refused".into(),
                status: None,
            });
        }
        Ok(self.name.clone())
    }
}
