//! Sluice Queue SDK - Broker Client Library
//!
//! Client for the Sluice queue broker: idempotent queue provisioning plus a
//! minimal push/head handle per attached queue.
//!
//! # Example
//!
//! ```no_run
//! use sluice_core::port::{keys, MapConfig};
//! use sluice_queue_sdk::attach;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: MapConfig = [(keys::BROKER_URL.to_string(), "http://broker:9000".to_string())]
//!         .into_iter()
//!         .collect();
//!
//!     let descriptor = "ns/orders".parse()?;
//!     let handle = attach(&config, &descriptor)?.provisioned().await?;
//!
//!     handle.push("hello").await?;
//!     if let Some(message) = handle.head().await? {
//!         println!("head: {}", message);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod handle;
mod types;

pub use client::QueueClient;
pub use error::{QueueError, Result};
pub use handle::{attach, attach_with_client, Attachment, QueueHandle};
pub use types::{CreateQueueRequest, HeadResponse};
