//! Serving status shared between the server lifecycle and the health route.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pivot_shared::types::ServingStatus;

/// Shared serving flag.
///
/// Starts out not serving. The server flips it once the rate table is loaded
/// and back again when shutdown begins.
#[derive(Debug, Clone, Default)]
pub struct HealthReporter {
    serving: Arc<AtomicBool>,
}

impl HealthReporter {
    /// Creates a reporter in the not-serving state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the service as ready.
    pub fn set_serving(&self) {
        self.serving.store(true, Ordering::Release);
    }

    /// Marks the service as draining or not ready.
    pub fn set_not_serving(&self) {
        self.serving.store(false, Ordering::Release);
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> ServingStatus {
        if self.serving.load(Ordering::Acquire) {
            ServingStatus::Serving
        } else {
            ServingStatus::NotServing
        }
    }
}
