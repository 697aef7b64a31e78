// Job Dispatch Registry
// Process-wide static dispatch table, built once during explicit
// initialization and shared read-only across concurrent resolutions.

use crate::domain::JobKind;
use crate::error::{CoreError, Result};
use crate::port::JobHandler;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Read-only mapping from job kind to handler.
///
/// Built via [`JobRegistry::builder`]; `build` validates the mapping is total
/// over [`JobKind::ALL`] so a missing registration fails at startup, not at
/// dispatch time.
#[derive(Debug)]
pub struct JobRegistry {
    handlers: HashMap<JobKind, Arc<dyn JobHandler>>,
}

impl JobRegistry {
    pub fn builder() -> JobRegistryBuilder {
        JobRegistryBuilder::default()
    }

    /// Look up the handler for a job kind.
    ///
    /// A miss is a loud `UnknownJobKind` failure, never a silent no-op.
    pub fn resolve(&self, kind: JobKind) -> Result<Arc<dyn JobHandler>> {
        self.handlers
            .get(&kind)
            .cloned()
            .ok_or_else(|| CoreError::UnknownJobKind(kind.to_string()))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Builder collecting handler registrations.
#[derive(Default)]
pub struct JobRegistryBuilder {
    handlers: HashMap<JobKind, Arc<dyn JobHandler>>,
}

impl JobRegistryBuilder {
    pub fn register(mut self, kind: JobKind, handler: Arc<dyn JobHandler>) -> Self {
        debug!(job_kind = %kind, "Registering job handler");
        self.handlers.insert(kind, handler);
        self
    }

    /// Finalize the registry, requiring a handler for every known kind.
    pub fn build(self) -> Result<JobRegistry> {
        for kind in JobKind::ALL {
            if !self.handlers.contains_key(kind) {
                return Err(CoreError::IncompleteRegistry(kind.to_string()));
            }
        }

        Ok(JobRegistry {
            handlers: self.handlers,
        })
    }

    /// Finalize without the completeness check.
    ///
    /// For deployments that intentionally run a subset of the known kinds;
    /// resolution of an unregistered kind still fails loudly.
    pub fn build_partial(self) -> JobRegistry {
        JobRegistry {
            handlers: self.handlers,
        }
    }
}
