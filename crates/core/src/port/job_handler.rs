// Job Handler Port
// Handlers are registered externally and invoked with the shared configuration;
// they manage their own lifetime (attach queues, spawn background work). The
// registry stores and resolves them, nothing more.

use crate::port::ConfigProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// A runnable job implementation behind a [`JobKind`](crate::domain::JobKind).
///
/// `run` owns the job's whole lifetime; the registry does not supervise or
/// restart handlers.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn run(&self, config: Arc<dyn ConfigProvider>) -> anyhow::Result<()>;
}

impl std::fmt::Debug for dyn JobHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn JobHandler")
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Recording mock handler
    pub struct MockJobHandler {
        calls: AtomicUsize,
        fail_with: Option<String>,
    }

    impl MockJobHandler {
        pub fn new_success() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        pub fn new_fail(message: impl Into<String>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: Some(message.into()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobHandler for MockJobHandler {
        async fn run(&self, _config: Arc<dyn ConfigProvider>) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.fail_with {
                Some(msg) => Err(anyhow::anyhow!(msg.clone())),
                None => Ok(()),
            }
        }
    }
}
