//! Shared reqwest plumbing for the platform service adapters.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

/// Build a blocking client with a per-request timeout.
pub fn build_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(Duration::from_secs(timeout_secs)).build()
}

/// Status plus body text; the body is empty when it cannot be read.
pub fn read_response(response: Response) -> (reqwest::StatusCode, String) {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    (status, body)
}

/// Human-readable reason for a non-2xx response.
pub fn failure_message(status: reqwest::StatusCode, body: &str) -> String {
    extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.trim().to_string()
        } else if status.is_server_error() {
            format!("Server error ({})", status.as_u16())
        } else {
            format!("Request rejected ({})", status.as_u16())
        }
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message").or(Some(error)))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
