//! Shell-script stand-ins for the external programs the launcher drives.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Exit code the fake runner returns, read from the environment at run time.
pub(crate) const NEXTFLOW_EXIT_VAR: &str = "FAKE_NEXTFLOW_EXIT";

pub(crate) fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// Records its arguments and environment, leaves a `.nextflow.log`, exits with
/// `$FAKE_NEXTFLOW_EXIT` (default 0).
pub(crate) fn install_nextflow(bin_dir: &Path, calls: &Path) -> PathBuf {
    let path = bin_dir.join("nextflow");
    let script = format!(
        r#"#!/bin/sh
echo "nextflow $*" >> "{calls}"
echo "claim=$K8S_STORAGE_CLAIM_NAME ansi=$NXF_ANSI_LOG home=$NXF_HOME" >> "{calls}"
echo "cwd=$(pwd)" >> "{calls}"
echo "Nextflow log for $*" > .nextflow.log
exit "${{{var}:-0}}"
"#,
        calls = calls.display(),
        var = NEXTFLOW_EXIT_VAR,
    );
    write_executable(&path, &script);
    path
}

/// Records `latch cp` calls.
pub(crate) fn install_latch(bin_dir: &Path, calls: &Path) -> PathBuf {
    let path = bin_dir.join("latch");
    let script = format!(
        r#"#!/bin/sh
echo "latch $*" >> "{}"
exit 0
"#,
        calls.display()
    );
    write_executable(&path, &script);
    path
}

/// Prints a fixed size the way `du -sb` does.
pub(crate) fn install_du(bin_dir: &Path, bytes: u64) -> PathBuf {
    let path = bin_dir.join("du");
    let script = format!("#!/bin/sh\nprintf '%s\\t%s\\n' {} \"$2\"\n", bytes);
    write_executable(&path, &script);
    path
}

/// Never finishes within any sensible deadline.
pub(crate) fn install_slow_du(bin_dir: &Path) -> PathBuf {
    let path = bin_dir.join("du-slow");
    write_executable(&path, "#!/bin/sh\nexec sleep 30\n");
    path
}
