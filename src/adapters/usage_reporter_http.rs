//! Storage usage reporting to the dispatcher.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::adapters::http::{build_client, failure_message, read_response};
use crate::domain::{AppError, DispatcherConfig, ExecutionToken};
use crate::ports::UsageReporter;

const SERVICE: &str = "storage dispatcher";
const REPORT_PATH: &str = "report-storage";

#[derive(Debug, Clone)]
pub struct HttpUsageReporter {
    endpoint: Url,
    client: Client,
}

impl HttpUsageReporter {
    pub fn new(config: &DispatcherConfig) -> Result<Self, AppError> {
        let client = build_client(config.timeout_secs).map_err(|e| AppError::ServiceError {
            service: SERVICE.into(),
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self { endpoint: config.endpoint(REPORT_PATH)?, client })
    }
}

#[derive(Debug, Serialize)]
struct UsageReport {
    used_bytes: u64,
}

impl UsageReporter for HttpUsageReporter {
    fn report_used_storage(
        &self,
        token: Option<&ExecutionToken>,
        used_bytes: u64,
    ) -> Result<(), AppError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&UsageReport { used_bytes });
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.authorization());
        }

        let response = request.send().map_err(|e| AppError::ServiceError {
            service: SERVICE.into(),
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let (status, body) = read_response(response);
        if status.is_success() {
            return Ok(());
        }

        Err(AppError::ServiceError {
            service: SERVICE.into(),
            message: failure_message(status, &body),
            status: Some(status.as_u16()),
        })
    }
}
