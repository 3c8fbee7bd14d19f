//! Execution name lookup against the platform GraphQL API.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::http::{build_client, failure_message, read_response};
use crate::domain::{AppError, ExecutionApiConfig, ExecutionToken};
use crate::ports::ExecutionLookup;

const SERVICE: &str = "execution API";

const EXECUTION_NAME_QUERY: &str = "query executionCreatorsByToken($token: String!) { \
     executionCreatorByToken(token: $token) { flytedbId info { displayName } } }";

#[derive(Debug, Clone)]
pub struct HttpExecutionLookup {
    endpoint: Url,
    client: Client,
}

impl HttpExecutionLookup {
    pub fn new(config: &ExecutionApiConfig) -> Result<Self, AppError> {
        let client = build_client(config.timeout_secs).map_err(|e| AppError::ServiceError {
            service: SERVICE.into(),
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self { endpoint: config.graphql_url.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    execution_creator_by_token: Option<ExecutionCreator>,
}

#[derive(Debug, Deserialize)]
struct ExecutionCreator {
    #[serde(default)]
    info: Option<ExecutionInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutionInfo {
    #[serde(default)]
    display_name: Option<String>,
}

impl ExecutionLookup for HttpExecutionLookup {
    fn execution_name(&self, token: &ExecutionToken) -> Result<Option<String>, AppError> {
        let request = GraphQlRequest {
            query: EXECUTION_NAME_QUERY,
            variables: Variables { token: token.as_str() },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, token.authorization())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::ServiceError {
                service: SERVICE.into(),
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let (status, body) = read_response(response);
        if !status.is_success() {
            return Err(AppError::ServiceError {
                service: SERVICE.into(),
                message: failure_message(status, &body),
                status: Some(status.as_u16()),
            });
        }

        let parsed: GraphQlResponse =
            serde_json::from_str(&body).map_err(|e| AppError::ServiceError {
                service: SERVICE.into(),
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        Ok(parsed
            .data
            .and_then(|data| data.execution_creator_by_token)
            .and_then(|creator| creator.info)
            .and_then(|info| info.display_name)
            .filter(|name| !name.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn lookup(server: &mockito::Server) -> HttpExecutionLookup {
        let config = ExecutionApiConfig {
            graphql_url: Url::parse(&format!("{}/graphql", server.url())).unwrap(),
            timeout_secs: 1,
        };
        HttpExecutionLookup::new(&config).unwrap()
    }

    #[test]
    fn returns_display_name() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Latch-Execution-Token exec-9")
            .match_body(Matcher::PartialJson(serde_json::json!({"variables": {"token": "exec-9"}})))
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "data": {
                        "executionCreatorByToken": {
                            "flytedbId": "1",
                            "info": {"displayName": "calm_lynx"}
                        }
                    }
                })
                .to_string(),
            )
            .expect(1)
            .create();

        let name = lookup(&server).execution_name(&ExecutionToken::new("exec-9")).unwrap();
        assert_eq!(name.as_deref(), Some("calm_lynx"));
        mock.assert();
    }

    #[test]
    fn missing_execution_yields_none() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(r#"{"data":{"executionCreatorByToken":null}}"#)
            .create();

        let name = lookup(&server).execution_name(&ExecutionToken::new("exec-9")).unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn server_error_is_reported() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/graphql").with_status(503).create();

        let err = lookup(&server).execution_name(&ExecutionToken::new("exec-9")).unwrap_err();
        assert!(matches!(err, AppError::ServiceError { status: Some(503), .. }));
    }

    #[test]
    fn malformed_body_is_reported() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/graphql").with_status(200).with_body("<html>").create();

        assert!(lookup(&server).execution_name(&ExecutionToken::new("exec-9")).is_err());
    }
}
