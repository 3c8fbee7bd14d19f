use crate::ports::{
    DiskUsageProbe, ExecutionLookup, LogUploader, PipelineRunner, StorageProvisioner,
    UsageReporter, WorkdirStager,
};

/// Application context holding the collaborators a command talks to.
pub struct AppContext {
    provisioner: Box<dyn StorageProvisioner>,
    lookup: Box<dyn ExecutionLookup>,
    stager: Box<dyn WorkdirStager>,
    runner: Box<dyn PipelineRunner>,
    uploader: Box<dyn LogUploader>,
    disk_usage: Box<dyn DiskUsageProbe>,
    reporter: Box<dyn UsageReporter>,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(
        provisioner: Box<dyn StorageProvisioner>,
        lookup: Box<dyn ExecutionLookup>,
        stager: Box<dyn WorkdirStager>,
        runner: Box<dyn PipelineRunner>,
        uploader: Box<dyn LogUploader>,
        disk_usage: Box<dyn DiskUsageProbe>,
        reporter: Box<dyn UsageReporter>,
    ) -> Self {
        Self { provisioner, lookup, stager, runner, uploader, disk_usage, reporter }
    }

    pub fn provisioner(&self) -> &dyn StorageProvisioner {
        self.provisioner.as_ref()
    }

    pub fn lookup(&self) -> &dyn ExecutionLookup {
        self.lookup.as_ref()
    }

    pub fn stager(&self) -> &dyn WorkdirStager {
        self.stager.as_ref()
    }

    pub fn runner(&self) -> &dyn PipelineRunner {
        self.runner.as_ref()
    }

    pub fn uploader(&self) -> &dyn LogUploader {
        self.uploader.as_ref()
    }

    pub fn disk_usage(&self) -> &dyn DiskUsageProbe {
        self.disk_usage.as_ref()
    }

    pub fn reporter(&self) -> &dyn UsageReporter {
        self.reporter.as_ref()
    }
}
