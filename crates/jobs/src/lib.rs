//! Sluice Jobs - deployed job handlers
//!
//! Builds the process-wide dispatch table for the closed set of job kinds.
//! Construction is explicit (no import-time side effects); callers hold the
//! registry and resolve handlers from it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sluice_core::domain::JobKind;
//! use sluice_core::port::{ConfigProvider, EnvConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = sluice_jobs::build_registry()?;
//!     let config: Arc<dyn ConfigProvider> = Arc::new(EnvConfig::default());
//!
//!     let handler = registry.resolve(JobKind::QueueLoadStream)?;
//!     handler.run(config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod load_stream;

pub use load_stream::LoadStreamJob;

use sluice_core::application::JobRegistry;
use sluice_core::domain::JobKind;
use sluice_core::Result;
use std::sync::Arc;

/// Build the registry for this deployment's job kinds.
///
/// Fails if any [`JobKind`] is left without a handler, so a wiring mistake
/// surfaces at startup rather than at dispatch time.
pub fn build_registry() -> Result<JobRegistry> {
    JobRegistry::builder()
        .register(JobKind::QueueLoadStream, Arc::new(LoadStreamJob))
        .build()
}
