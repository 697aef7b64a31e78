// Sluice Core - Domain Logic & Ports
// NO infrastructure dependencies: the queue transport lives in sluice-queue-sdk

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{CoreError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
