use serde::{Deserialize, Serialize};

/// Success body for signup/unregister confirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body for domain failures, e.g. `{"detail": "Activity not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
