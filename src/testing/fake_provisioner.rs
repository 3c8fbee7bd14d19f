use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ExecutionToken, VolumeHandle};
use crate::ports::StorageProvisioner;

#[derive(Clone)]
pub struct FakeProvisioner {
    pub requests: Arc<Mutex<Vec<(String, u32)>>>,
    volume: Option<String>,
}

impl FakeProvisioner {
    pub fn returning(volume: &str) -> Self {
        Self { requests: Arc::default(), volume: Some(volume.to_string()) }
    }

    pub fn rejecting() -> Self {
        Self { requests: Arc::default(), volume: None }
    }
}

impl StorageProvisioner for FakeProvisioner {
    fn provision(
        &self,
        token: &ExecutionToken,
        storage_gib: u32,
    ) -> Result<VolumeHandle, AppError> {
        self.requests.lock().unwrap().push((token.as_str().to_string(), storage_gib));
        match &self.volume {
            Some(volume) => Ok(VolumeHandle::new(volume.clone())),
            None => Err(AppError::Provisioning {
                message: "Dispatcher rejected the request".into(),
                status: Some(500),
            }),
        }
    }
}
