use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SemdiffError {
    /// Connection failed, TLS error, timeout, etc.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response from {host}: {status}")]
    Status { host: String, status: u16 },

    /// Body was not JSON, or items lack `principal`, `resource_arn` or `action`.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("failed to read plan file {}: {source}", .path.display())]
    PlanRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("plan file {} is empty", .path.display())]
    EmptyPlan { path: PathBuf },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SemdiffError {
    /// Transport-level failures: the call never produced a usable 200 response.
    pub fn is_transport(&self) -> bool {
        matches!(self, SemdiffError::Network(_) | SemdiffError::Status { .. })
    }
}
