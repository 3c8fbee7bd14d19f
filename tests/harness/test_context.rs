//! Shared testing harness for `rnafusion-launcher` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools;

pub(crate) const TOKEN_VAR: &str = "FLYTE_INTERNAL_EXECUTION_ID";
pub(crate) const DU_BYTES: u64 = 3 * 1024 * 1024 * 1024;

/// Isolated pipeline checkout, working directory and fake tools.
pub(crate) struct TestContext {
    root: TempDir,
    source_root: PathBuf,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    calls: PathBuf,
    nextflow: PathBuf,
    latch: PathBuf,
    du: PathBuf,
    slow_du: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with a small pipeline checkout.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let source_root = root.path().join("pipeline");
        let work_dir = root.path().join("nf-workdir");
        let bin_dir = root.path().join("bin");
        let calls = root.path().join("calls.log");

        fs::create_dir_all(source_root.join("conf")).expect("Failed to create pipeline dir");
        fs::create_dir_all(source_root.join("work/stale")).expect("Failed to create work dir");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::write(source_root.join("main.nf"), "workflow {}\n").expect("write main.nf");
        fs::write(source_root.join("latch.config"), "process {}\n").expect("write latch.config");
        fs::write(source_root.join("conf/base.config"), "params {}\n").expect("write base.config");
        fs::write(source_root.join("work/stale/task.log"), "old\n").expect("write stale task");

        let nextflow = fake_tools::install_nextflow(&bin_dir, &calls);
        let latch = fake_tools::install_latch(&bin_dir, &calls);
        let du = fake_tools::install_du(&bin_dir, DU_BYTES);
        let slow_du = fake_tools::install_slow_du(&bin_dir);

        Self { root, source_root, work_dir, bin_dir, calls, nextflow, latch, du, slow_du }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.path().join("launcher.toml")
    }

    /// Write the launcher config wired to the fake tools and `dispatcher_url`.
    pub(crate) fn write_config(&self, dispatcher_url: &str, slow_du: bool) -> PathBuf {
        self.write_config_with(dispatcher_url, "http://127.0.0.1:9/graphql", slow_du)
    }

    pub(crate) fn write_config_with(
        &self,
        dispatcher_url: &str,
        graphql_url: &str,
        slow_du: bool,
    ) -> PathBuf {
        let du = if slow_du { &self.slow_du } else { &self.du };
        let content = format!(
            r#"[dispatcher]
url = "{dispatcher}"
timeout_secs = 5

[execution]
graphql_url = "{graphql}"
timeout_secs = 2

[runtime]
source_root = "{source}"
work_dir = "{work}"
executable = "{nextflow}"
nxf_home = "{home}"

[logs]
base = "latch:///logs"
upload_program = "{latch}"

[usage]
timeout_secs = 1
program = "{du}"
"#,
            dispatcher = dispatcher_url,
            graphql = graphql_url,
            source = self.source_root.display(),
            work = self.work_dir.display(),
            nextflow = self.nextflow.display(),
            home = self.root.path().join(".nextflow").display(),
            latch = self.latch.display(),
            du = du.display(),
        );
        let path = self.config_path();
        fs::write(&path, content).expect("Failed to write launcher config");
        path
    }

    /// Write a JSON params file with the required parameters set.
    pub(crate) fn write_params(&self, extra: &str) -> PathBuf {
        let path = self.root.path().join("params.json");
        let mut content = String::from(
            r#"{"outdir": "latch:///results", "genomes_base": "latch:///references""#,
        );
        if !extra.is_empty() {
            content.push_str(", ");
            content.push_str(extra);
        }
        content.push('}');
        fs::write(&path, content).expect("Failed to write params file");
        path
    }

    /// Build a command for the compiled binary with no execution token in the environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("rnafusion-launcher").expect("Failed to locate launcher binary");
        cmd.current_dir(self.root.path()).env_remove(TOKEN_VAR).env("HOME", self.root.path());
        cmd
    }

    /// Everything the fake tools recorded, one line per entry.
    pub(crate) fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.calls)
            .map(|content| content.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    pub(crate) fn nextflow_call(&self) -> Option<String> {
        self.calls().into_iter().find(|line| line.starts_with("nextflow "))
    }

    pub(crate) fn latch_calls(&self) -> Vec<String> {
        self.calls().into_iter().filter(|line| line.starts_with("latch ")).collect()
    }
}
