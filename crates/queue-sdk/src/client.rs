//! Queue Broker Transport
//!
//! Issues the three broker operations over HTTP and normalizes responses:
//! a 409 on create and a `no_message` body on head are expected broker
//! states, not failures. Everything else propagates as [`QueueError`].

use crate::error::{QueueError, Result};
use crate::types::{CreateQueueRequest, HeadResponse, NO_MESSAGE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the queue broker.
///
/// Stateless beyond the base URL; every call is an independent round trip
/// and no call is retried. Cheap to share behind an `Arc` across handles.
pub struct QueueClient {
    http: Client,
    base_url: String,
}

impl QueueClient {
    /// Create a client with the default per-request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resource URL for a queue.
    pub fn queue_url(&self, queue_name: &str) -> String {
        format!("{}/queues/{}", self.base_url, queue_name)
    }

    /// Create a queue on the broker (idempotent).
    ///
    /// A 409 means the queue already exists, which is success for our
    /// purposes; concurrent creations of the same queue must not fail
    /// either caller.
    pub async fn create_queue(&self, queue_name: &str) -> Result<()> {
        let url = format!("{}/queues", self.base_url);
        debug!(queue = %queue_name, "Creating queue");

        let response = self
            .http
            .post(&url)
            .json(&CreateQueueRequest { name: queue_name })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::CONFLICT {
            return Ok(());
        }

        Err(QueueError::UnexpectedStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }

    /// Push a raw payload onto a queue.
    pub async fn push_message(&self, queue_name: &str, payload: impl Into<String>) -> Result<()> {
        let response = self
            .http
            .put(self.queue_url(queue_name))
            .body(payload.into())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(QueueError::UnexpectedStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }

    /// Peek the message at the head of a queue without consuming it.
    ///
    /// Returns `Ok(None)` when the queue is empty. The broker may report
    /// empty with a non-2xx status carrying `{"error":"no_message"}`; that
    /// body wins over the status code.
    pub async fn peek_head(&self, queue_name: &str) -> Result<Option<String>> {
        let url = format!("{}/head", self.queue_url(queue_name));
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if let Ok(head) = serde_json::from_str::<HeadResponse>(&body) {
            if head.error.as_deref() == Some(NO_MESSAGE) {
                return Ok(None);
            }

            if status.is_success() {
                return match head.message {
                    Some(message) => Ok(Some(message)),
                    None => Err(QueueError::MalformedResponse(format!(
                        "head response carried no message: {}",
                        body
                    ))),
                };
            }
        } else if status.is_success() {
            return Err(QueueError::MalformedResponse(format!(
                "head response is not valid JSON: {}",
                body
            )));
        }

        Err(QueueError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
