// Central Error Type for the Core Crate

use thiserror::Error;

/// Core error type
///
/// Transport-level failures live in `sluice-queue-sdk`; everything here is a
/// local contract violation that must fail loudly at the boundary.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("malformed stream descriptor '{0}': expected '<namespace>/<queue>'")]
    MalformedDescriptor(String),

    #[error("unknown job kind: {0}")]
    UnknownJobKind(String),

    #[error("missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("job registry is missing a handler for: {0}")]
    IncompleteRegistry(String),
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
