use std::process::Command;

use crate::domain::{AppError, PipelineInvocation};
use crate::ports::{PipelineExit, PipelineRunner};

/// Runs the pipeline runner as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct NextflowCommandRunner;

impl NextflowCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineRunner for NextflowCommandRunner {
    fn run(&self, invocation: &PipelineInvocation) -> Result<PipelineExit, AppError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        command.current_dir(&invocation.cwd);

        let status = command.status().map_err(|e| AppError::ExternalToolError {
            tool: invocation.program.display().to_string(),
            error: format!("Failed to start pipeline runner: {}", e),
        })?;

        Ok(PipelineExit { code: status.code() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_script;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn invocation(program: PathBuf, cwd: PathBuf) -> PipelineInvocation {
        PipelineInvocation {
            program,
            args: vec!["run".into(), "main.nf".into(), "--arriba".into()],
            env: vec![("K8S_STORAGE_CLAIM_NAME".into(), "pvc-1".into())],
            cwd,
        }
    }

    #[test]
    #[serial(scripts)]
    fn passes_args_env_and_cwd() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            dir.path(),
            "nextflow",
            r#"echo "$@" > args.txt
echo "$K8S_STORAGE_CLAIM_NAME" > claim.txt"#,
        );

        let invocation = invocation(script, dir.path().to_path_buf());
        let exit = NextflowCommandRunner::new().run(&invocation).unwrap();

        assert!(exit.success());
        let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert_eq!(args, "run main.nf --arriba\n");
        assert_eq!(fs::read_to_string(dir.path().join("claim.txt")).unwrap(), "pvc-1\n");
    }

    #[test]
    #[serial(scripts)]
    fn reports_non_zero_exit() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "nextflow", "exit 3");

        let invocation = invocation(script, dir.path().to_path_buf());
        let exit = NextflowCommandRunner::new().run(&invocation).unwrap();

        assert!(!exit.success());
        assert_eq!(exit.code, Some(3));
        assert_eq!(exit.to_string(), "exit status 3");
    }

    #[test]
    fn missing_executable_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = NextflowCommandRunner::new()
            .run(&invocation(dir.path().join("absent"), dir.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalToolError { .. }));
    }
}
