//! Parameter schema for the rnafusion pipeline.
//!
//! The table in [`table`] is the single source of truth for every flag the
//! launcher can emit. Descriptors are declared once, in flag order, and never
//! change at runtime.

mod set;
mod table;
mod value;

use serde::Serialize;

pub use set::{ParameterInput, ParameterSet, RawValue};
pub use table::{OUTDIR_PARAMETER, PARAMETERS};
pub use value::{ParameterValue, PathValue};

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Bool,
    Int,
    Str,
    /// Path-like value pointing at a single file.
    File,
    /// Path-like value pointing at a directory.
    Dir,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Bool => "bool",
            ParameterKind::Int => "int",
            ParameterKind::Str => "str",
            ParameterKind::File => "file",
            ParameterKind::Dir => "dir",
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, ParameterKind::File | ParameterKind::Dir)
    }
}

/// How a resolved value turns into command-line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagRule {
    /// `--name` when true, nothing when false.
    Switch,
    /// `--name <value>`.
    Valued,
    /// `--name <value>/<run name>`.
    OutputDir,
}

/// Compile-time default for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

/// A declared pipeline parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    /// Display label; starts a new group that runs until the next label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<&'static str>,
    pub description: &'static str,
    pub flag: FlagRule,
}

impl ParameterDescriptor {
    pub const fn optional(
        name: &'static str,
        kind: ParameterKind,
        description: &'static str,
    ) -> Self {
        let flag = match kind {
            ParameterKind::Bool => FlagRule::Switch,
            _ => FlagRule::Valued,
        };
        Self { name, kind, required: false, default: None, section: None, description, flag }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }

    pub const fn with_default(self, default: Literal) -> Self {
        Self { default: Some(default), ..self }
    }

    pub const fn in_section(self, section: &'static str) -> Self {
        Self { section: Some(section), ..self }
    }

    pub const fn output_dir(self) -> Self {
        Self { flag: FlagRule::OutputDir, ..self }
    }

    /// The command-line flag name, e.g. `--read_length`.
    pub fn flag_name(&self) -> String {
        format!("--{}", self.name)
    }
}

/// Look up a descriptor by parameter name.
pub fn lookup(name: &str) -> Option<&'static ParameterDescriptor> {
    PARAMETERS.iter().find(|descriptor| descriptor.name == name)
}

/// A run of descriptors sharing a display label.
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySection {
    pub title: Option<&'static str>,
    pub parameters: Vec<&'static ParameterDescriptor>,
}

/// Group the table for display; unlabeled leading descriptors form an untitled group.
pub fn sections() -> Vec<DisplaySection> {
    let mut groups: Vec<DisplaySection> = Vec::new();
    for descriptor in PARAMETERS {
        match (descriptor.section, groups.last_mut()) {
            (None, Some(current)) => current.parameters.push(descriptor),
            (title, _) => {
                groups.push(DisplaySection { title, parameters: vec![descriptor] });
            }
        }
    }
    groups
}
