use std::path::PathBuf;

use axum::{
    extract::rejection::StringRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::webhook::{types::ErrorAck, utils::json_reply};

/// Message returned in place of fault text when details are hidden
pub const GENERIC_FAULT_MESSAGE: &str = "Failed to read request body";

/// Faults raised while handling a single webhook request
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("{0}")]
    Body(String),

    /// A fault whose details are withheld from the caller
    #[error("{}", GENERIC_FAULT_MESSAGE)]
    Redacted,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        json_reply(StatusCode::BAD_REQUEST, ErrorAck::new(self.to_string()))
    }
}

impl From<StringRejection> for WebhookError {
    fn from(rejection: StringRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
