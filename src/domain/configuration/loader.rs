//! Loading of launcher configuration and parameter files.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{AppError, LauncherConfig};

/// Load the launcher configuration; `None` yields validated defaults.
pub fn load_config(path: Option<&Path>) -> Result<LauncherConfig, AppError> {
    let Some(path) = path else {
        let config = LauncherConfig::default();
        config.validate()?;
        return Ok(config);
    };

    if !path.exists() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<LauncherConfig, AppError> {
    let config: LauncherConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read a params file as a flat `name -> value` object.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn load_params_file(path: &Path) -> Result<Map<String, Value>, AppError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml { parse_params_toml(&content) } else { parse_params_json(&content) }
}

pub fn parse_params_json(content: &str) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_str(content).map_err(|e| AppError::ParseError {
        what: "params file".to_string(),
        details: e.to_string(),
    })?;
    into_object(value)
}

pub fn parse_params_toml(content: &str) -> Result<Map<String, Value>, AppError> {
    let table: toml::Table = toml::from_str(content)?;
    let value = serde_json::to_value(table).map_err(|e| AppError::ParseError {
        what: "params file".to_string(),
        details: e.to_string(),
    })?;
    into_object(value)
}

fn into_object(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::ParseError {
            what: "params file".to_string(),
            details: format!("expected an object of parameter values, got {}", other),
        }),
    }
}
