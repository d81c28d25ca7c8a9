//! DTOs for the health check endpoint.

use serde::Serialize;

/// Top-level health report: overall verdict plus per-component detail.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// One entry per dependency the service cannot run without.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: CheckStatus,
    pub rate_limiter: CheckStatus,
}

/// Outcome of probing a single component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
