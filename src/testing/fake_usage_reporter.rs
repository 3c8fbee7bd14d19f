use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ExecutionToken};
use crate::ports::UsageReporter;

#[derive(Clone, Default)]
pub struct FakeUsageReporter {
    pub reports: Arc<Mutex<Vec<(Option<String>, u64)>>>,
    fail: bool,
}

impl FakeUsageReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn reported(&self) -> Vec<(Option<String>, u64)> {
        self.reports.lock().unwrap().clone()
    }
}

impl UsageReporter for FakeUsageReporter {
    fn report_used_storage(
        &self,
        token: Option<&ExecutionToken>,
        used_bytes: u64,
    ) -> Result<(), AppError> {
        self.reports.lock().unwrap().push((token.map(|t| t.as_str().to_string()), used_bytes));
        if self.fail {
            return Err(AppError::ServiceError {
                service: "storage dispatcher".into(),
                message: "unavailable".into(),
                status: Some(503),
            });
        }
        Ok(())
    }
}
