//! Listing of the declared parameter table.

use std::fmt::Write;

use crate::domain::AppError;
use crate::domain::parameters::{DisplaySection, Literal, ParameterDescriptor, sections};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamsFormat {
    #[default]
    Text,
    Json,
}

/// Render every declared parameter grouped by display section.
pub fn execute(format: ParamsFormat) -> Result<String, AppError> {
    let groups = sections();
    match format {
        ParamsFormat::Text => Ok(render_text(&groups)),
        ParamsFormat::Json => serde_json::to_string_pretty(&groups).map_err(|e| {
            AppError::ParseError { what: "parameter table".into(), details: e.to_string() }
        }),
    }
}

fn render_text(groups: &[DisplaySection]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", group.title.unwrap_or("General"));
        for descriptor in &group.parameters {
            let _ = writeln!(out, "  {} ({})", descriptor.flag_name(), annotation(descriptor));
            let _ = writeln!(out, "      {}", descriptor.description);
        }
    }
    out
}

fn annotation(descriptor: &ParameterDescriptor) -> String {
    let mut parts = vec![descriptor.kind.as_str().to_string()];
    if descriptor.required {
        parts.push("required".to_string());
    }
    match descriptor.default {
        Some(Literal::Bool(value)) => parts.push(format!("default: {}", value)),
        Some(Literal::Int(value)) => parts.push(format!("default: {}", value)),
        Some(Literal::Str(value)) => parts.push(format!("default: {}", value)),
        None => {}
    }
    parts.join(", ")
}
