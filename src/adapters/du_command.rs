use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::ports::{DiskUsageProbe, UsageMeasurementError};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Measures apparent size with `du -sb`, killing it once the deadline passes.
#[derive(Debug, Clone)]
pub struct DuCommandProbe {
    program: PathBuf,
}

impl Default for DuCommandProbe {
    fn default() -> Self {
        Self { program: PathBuf::from("du") }
    }
}

impl DuCommandProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }
}

impl DiskUsageProbe for DuCommandProbe {
    fn measure(&self, dir: &Path, timeout: Duration) -> Result<u64, UsageMeasurementError> {
        let mut child = Command::new(&self.program)
            .arg("-sb")
            .arg(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| UsageMeasurementError::Failed(format!("Failed to execute du: {}", e)))?;

        // Drain stderr concurrently; a full pipe would stall du until the deadline.
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf);
                buf
            })
        });

        let status = match wait_with_deadline(&mut child, timeout)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(UsageMeasurementError::TimedOut(timeout));
            }
        };

        let mut stdout = String::new();
        if let Some(mut out) = child.stdout.take() {
            out.read_to_string(&mut stdout).map_err(|e| {
                UsageMeasurementError::Failed(format!("Failed to read du output: {}", e))
            })?;
        }
        let stderr = stderr_reader.and_then(|handle| handle.join().ok()).unwrap_or_default();

        if !status.success() {
            let stderr = stderr.trim();
            return Err(UsageMeasurementError::Failed(if stderr.is_empty() {
                format!("du exited with {}", status)
            } else {
                stderr.to_string()
            }));
        }

        parse_du_output(&stdout)
    }
}

fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> Result<Option<std::process::ExitStatus>, UsageMeasurementError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) if Instant::now() >= deadline => return Ok(None),
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                return Err(UsageMeasurementError::Failed(format!("Failed to wait for du: {}", e)));
            }
        }
    }
}

/// First whitespace-separated field of `du -sb` output, in bytes.
fn parse_du_output(stdout: &str) -> Result<u64, UsageMeasurementError> {
    let field = stdout.split_whitespace().next().ok_or_else(|| {
        UsageMeasurementError::Failed("du produced no output".to_string())
    })?;
    field.parse::<u64>().map_err(|e| {
        UsageMeasurementError::Failed(format!("Unexpected du output '{}': {}", field, e))
    })
}
