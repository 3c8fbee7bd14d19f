use std::io;

use thiserror::Error;

/// Library-wide error type for launcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config file passed explicitly but absent on disk.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error for non-TOML inputs.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// The execution identity token is not present in the environment.
    #[error("Failed to get execution token: {0} is not set")]
    ExecutionTokenMissing(String),

    /// Storage provisioning call failed.
    #[error("Storage provisioning failed: {message}")]
    Provisioning { message: String, status: Option<u16> },

    /// Parameter name is not declared in the parameter table.
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value does not match the declared kind.
    #[error("Invalid value for parameter '{name}': {details}")]
    InvalidParameterValue { name: String, details: String },

    /// Required parameter has no value and no default.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),

    /// Staging the pipeline working directory failed.
    #[error("Failed to stage working directory {path}: {details}")]
    Staging { path: String, details: String },

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// HTTP call to an auxiliary service failed.
    #[error("Request to {service} failed: {message}")]
    ServiceError { service: String, message: String, status: Option<u16> },

    /// The pipeline run did not complete successfully.
    #[error("Pipeline run failed: {0}")]
    PipelineFailed(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn invalid_value<N: Into<String>, D: Into<String>>(name: N, details: D) -> Self {
        AppError::InvalidParameterValue { name: name.into(), details: details.into() }
    }
}
