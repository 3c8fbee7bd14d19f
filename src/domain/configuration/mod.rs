pub mod launcher_config;
pub mod loader;

pub use launcher_config::{
    DispatcherConfig, ExecutionApiConfig, LauncherConfig, LogUploadConfig, RuntimeConfig,
    UsageConfig,
};
pub use loader::{load_config, load_params_file, parse_config_content};
