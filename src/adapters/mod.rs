pub mod du_command;
pub mod execution_lookup_http;
pub mod http;
pub mod nextflow_command;
pub mod provisioning_http;
pub mod upload_command;
pub mod usage_reporter_http;
pub mod workdir_filesystem;
