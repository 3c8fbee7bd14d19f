use crate::domain::{AppError, ExecutionToken};

/// Port for reporting consumed storage to the metrics collector.
pub trait UsageReporter {
    fn report_used_storage(
        &self,
        token: Option<&ExecutionToken>,
        used_bytes: u64,
    ) -> Result<(), AppError>;
}
