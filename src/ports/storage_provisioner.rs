//! Shared storage provisioning port definition.

use crate::domain::{AppError, ExecutionToken, VolumeHandle};

/// Port for allocating the shared volume a run works on.
pub trait StorageProvisioner {
    /// Request a volume of `storage_gib` for the execution identified by `token`.
    ///
    /// A single attempt; any failure is returned to the caller.
    fn provision(&self, token: &ExecutionToken, storage_gib: u32) -> Result<VolumeHandle, AppError>;
}
