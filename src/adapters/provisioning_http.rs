//! Storage dispatcher client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::http::{build_client, failure_message, read_response};
use crate::domain::{AppError, DispatcherConfig, ExecutionToken, VolumeHandle};
use crate::ports::StorageProvisioner;

const PROVISION_PATH: &str = "provision-storage";

/// HTTP transport for volume provisioning.
///
/// Performs exactly one request per call; there is no retry wrapper.
#[derive(Debug, Clone)]
pub struct HttpStorageProvisioner {
    endpoint: Url,
    client: Client,
}

impl HttpStorageProvisioner {
    pub fn new(config: &DispatcherConfig) -> Result<Self, AppError> {
        let client = build_client(config.timeout_secs).map_err(|e| AppError::Provisioning {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self { endpoint: config.endpoint(PROVISION_PATH)?, client })
    }
}

#[derive(Debug, Serialize)]
struct ProvisionRequest {
    storage_gib: u32,
}

#[derive(Debug, Deserialize)]
struct ProvisionResponse {
    #[serde(default)]
    name: Option<String>,
}

impl StorageProvisioner for HttpStorageProvisioner {
    fn provision(
        &self,
        token: &ExecutionToken,
        storage_gib: u32,
    ) -> Result<VolumeHandle, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, token.authorization())
            .header(CONTENT_TYPE, "application/json")
            .json(&ProvisionRequest { storage_gib })
            .send()
            .map_err(|e| AppError::Provisioning {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let (status, body) = read_response(response);

        if !status.is_success() {
            return Err(AppError::Provisioning {
                message: failure_message(status, &body),
                status: Some(status.as_u16()),
            });
        }

        let parsed: ProvisionResponse =
            serde_json::from_str(&body).map_err(|e| AppError::Provisioning {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        match parsed.name.filter(|name| !name.trim().is_empty()) {
            Some(name) => Ok(VolumeHandle::new(name)),
            None => Err(AppError::Provisioning {
                message: "No volume name in response".into(),
                status: Some(status.as_u16()),
            }),
        }
    }
}
