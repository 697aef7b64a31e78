//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue SDK Error
///
/// "Queue empty" is not represented here: `peek_head`/`head` return
/// `Ok(None)` for it. Likewise a 409 on queue creation is absorbed as
/// success inside the transport.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("broker returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed broker response: {0}")]
    MalformedResponse(String),

    #[error("queue provisioning failed: {0}")]
    Provisioning(String),

    #[error(transparent)]
    Core(#[from] sluice_core::CoreError),
}
