use serde::Serialize;

pub const SUCCESS_STATUS: &str = "success";
pub const ERROR_STATUS: &str = "error";
pub const HEALTHY_STATUS: &str = "healthy";
pub const RECEIVED_MESSAGE: &str = "Webhook received successfully";

/// Acknowledgment returned for every webhook that was read successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub message: &'static str,
    /// Raw request body, echoed verbatim
    pub data: String,
}

impl WebhookAck {
    pub fn received(data: String) -> Self {
        Self { status: SUCCESS_STATUS, message: RECEIVED_MESSAGE, data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: HEALTHY_STATUS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorAck {
    pub status: &'static str,
    pub message: String,
}

impl ErrorAck {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: ERROR_STATUS, message: message.into() }
    }
}
