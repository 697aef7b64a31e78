//! Broker Wire Types
//!
//! Mirrors the broker's fixed HTTP contract. The broker signals "empty" and
//! "already exists" as structured payloads/status codes rather than distinct
//! endpoints; the client collapses those into ordinary return values.

use serde::{Deserialize, Serialize};

/// `error` value the broker uses to signal an empty queue on head.
pub(crate) const NO_MESSAGE: &str = "no_message";

/// Body of `POST /queues`
#[derive(Debug, Clone, Serialize)]
pub struct CreateQueueRequest<'a> {
    pub name: &'a str,
}

/// Body of `GET /queues/<name>/head`
///
/// Exactly one of `message`/`error` is expected to be present.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
