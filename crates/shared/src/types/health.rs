//! Health check serving status.

use serde::{Deserialize, Serialize};

/// Whether the service is ready to answer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServingStatus {
    /// Rates are loaded and requests are accepted.
    Serving,
    /// Starting up or shutting down.
    NotServing,
}

impl ServingStatus {
    /// Returns true if the service is serving.
    #[must_use]
    pub const fn is_serving(self) -> bool {
        matches!(self, Self::Serving)
    }
}
