//! Queue Attachment
//!
//! Binds a [`StreamDescriptor`] to a broker queue and exposes the narrow
//! push/head contract. Provisioning (the idempotent create) runs in the
//! background so attachment never blocks on it; the outcome is delivered on
//! an explicit channel instead of being silently dropped.

use crate::client::QueueClient;
use crate::error::{QueueError, Result};
use sluice_core::domain::StreamDescriptor;
use sluice_core::port::{keys, ConfigProvider};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Per-attachment handle for one queue.
///
/// Owns no remote state; the queue's lifetime is independent of the handle's,
/// and any number of handles may reference the same queue concurrently.
#[derive(Clone)]
pub struct QueueHandle {
    client: Arc<QueueClient>,
    queue_name: String,
}

impl std::fmt::Debug for QueueHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueHandle")
            .field("queue_name", &self.queue_name)
            .finish_non_exhaustive()
    }
}

impl QueueHandle {
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Push a raw payload onto the queue.
    ///
    /// Delivery order among concurrent pushes is decided by the broker, not
    /// by this client.
    pub async fn push(&self, payload: impl Into<String>) -> Result<()> {
        self.client.push_message(&self.queue_name, payload).await
    }

    /// Peek the head of the queue; `Ok(None)` means empty.
    pub async fn head(&self) -> Result<Option<String>> {
        self.client.peek_head(&self.queue_name).await
    }
}

/// A freshly attached queue plus its in-flight provisioning outcome.
///
/// The create request runs on a background task. Callers that care whether
/// provisioning succeeded await [`Attachment::provisioned`]; callers that
/// don't can take the handle immediately, accepting that a push/head racing
/// the in-flight create may fail with "not found" (not retried here).
/// Either way a non-409 provisioning failure is logged.
pub struct Attachment {
    handle: QueueHandle,
    provisioned: oneshot::Receiver<Result<()>>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl Attachment {
    /// Handle for immediate use, without waiting for provisioning.
    pub fn handle(&self) -> QueueHandle {
        self.handle.clone()
    }

    /// Discard the provisioning channel and keep the handle.
    pub fn into_handle(self) -> QueueHandle {
        self.handle
    }

    /// Wait for the provisioning create to finish, then return the handle.
    pub async fn provisioned(self) -> Result<QueueHandle> {
        match self.provisioned.await {
            Ok(Ok(())) => Ok(self.handle),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(QueueError::Provisioning(
                "provisioning task dropped before completing".to_string(),
            )),
        }
    }
}

/// Attach to the queue named by a descriptor.
///
/// Resolves the broker base URL from configuration, kicks off the idempotent
/// queue create in the background, and returns immediately. Requires a tokio
/// runtime context.
pub fn attach(config: &dyn ConfigProvider, descriptor: &StreamDescriptor) -> Result<Attachment> {
    let base_url = config.require(keys::BROKER_URL)?;
    let client = Arc::new(QueueClient::new(base_url)?);

    Ok(attach_with_client(client, descriptor))
}

/// Attach using an existing shared transport.
pub fn attach_with_client(client: Arc<QueueClient>, descriptor: &StreamDescriptor) -> Attachment {
    let queue_name = descriptor.queue_name().to_string();
    debug!(
        stream = %descriptor,
        url = %client.queue_url(&queue_name),
        "Attaching to queue"
    );

    let (tx, rx) = oneshot::channel();
    let provisioning_client = Arc::clone(&client);
    let provisioning_queue = queue_name.clone();

    tokio::spawn(async move {
        let result = provisioning_client.create_queue(&provisioning_queue).await;

        if let Err(e) = &result {
            // Logged unconditionally; the receiver side is optional.
            warn!(queue = %provisioning_queue, error = %e, "Queue provisioning failed");
        }

        let _ = tx.send(result);
    });

    Attachment {
        handle: QueueHandle {
            client,
            queue_name,
        },
        provisioned: rx,
    }
}
