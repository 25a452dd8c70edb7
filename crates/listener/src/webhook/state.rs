use std::sync::Arc;

use crate::{config::ListenerConfig, error::WebhookError};

/// Application state shared across webhook handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ListenerConfig>,
}

impl AppState {
    pub fn new(config: ListenerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Apply the fault-exposure policy to `err` before it reaches the caller
    pub fn surface(&self, err: WebhookError) -> WebhookError {
        if self.config.expose_fault_details {
            err
        } else {
            WebhookError::Redacted
        }
    }
}
