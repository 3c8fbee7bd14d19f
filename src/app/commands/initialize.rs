//! Shared storage provisioning.

use std::io::{self, Write};

use crate::app::AppContext;
use crate::domain::{AppError, DispatcherConfig, EXECUTION_TOKEN_VAR, ExecutionToken, VolumeHandle};

/// Allocate the shared volume for this execution.
///
/// Fails immediately when no token is available or the dispatcher refuses.
pub fn execute(
    ctx: &AppContext,
    dispatcher: &DispatcherConfig,
    token: Option<&ExecutionToken>,
) -> Result<VolumeHandle, AppError> {
    let token = token.ok_or_else(|| AppError::ExecutionTokenMissing(EXECUTION_TOKEN_VAR.into()))?;

    print!("Provisioning shared storage volume... ");
    let _ = io::stdout().flush();

    let volume = ctx.provisioner().provision(token, dispatcher.storage_gib)?;
    println!("Done.");
    log::debug!("Provisioned volume {}", volume);

    Ok(volume)
}
