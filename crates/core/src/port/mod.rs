// Port Layer - Interfaces for external dependencies

pub mod config_provider;
pub mod job_handler;

// Re-exports
pub use config_provider::{keys, ConfigProvider, EnvConfig, MapConfig};
pub use job_handler::JobHandler;
