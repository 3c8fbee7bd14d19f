//! The pipeline runner command line and environment.

use std::path::PathBuf;

use crate::domain::{RuntimeConfig, VolumeHandle};

/// A fully assembled runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Added on top of the inherited environment.
    pub env: Vec<(String, String)>,
    pub cwd: PathBuf,
}

impl PipelineInvocation {
    pub fn new(runtime: &RuntimeConfig, volume: &VolumeHandle, flags: Vec<String>) -> Self {
        let work_dir = runtime.work_dir.display().to_string();

        let mut args = vec![
            "run".to_string(),
            runtime.work_dir.join(&runtime.entrypoint).display().to_string(),
            "-work-dir".to_string(),
            work_dir,
            "-profile".to_string(),
            runtime.profiles.join(","),
            "-c".to_string(),
            runtime.config_file.clone(),
        ];
        if runtime.resume {
            args.push("-resume".to_string());
        }
        args.extend(flags);

        let env = vec![
            ("NXF_HOME".to_string(), runtime.nxf_home.display().to_string()),
            ("NXF_OPTS".to_string(), runtime.nxf_opts.clone()),
            ("K8S_STORAGE_CLAIM_NAME".to_string(), volume.as_str().to_string()),
            ("NXF_DISABLE_CHECK_LATEST".to_string(), "true".to_string()),
            ("NXF_ANSI_LOG".to_string(), "false".to_string()),
        ];

        Self { program: runtime.executable.clone(), args, env, cwd: runtime.work_dir.clone() }
    }

    /// Space-joined command line as printed before launch.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}
