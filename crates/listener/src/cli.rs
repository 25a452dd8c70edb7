use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

use crate::{
    config::{ListenerConfig, LogFormat},
    error::Result,
};

#[derive(Debug, Parser)]
#[command(name = "webhook-listener")]
#[command(about = "Accepts webhook notifications and echoes an acknowledgment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML config file, flags and environment take precedence over it
    #[arg(long, env = "WEBHOOK_LISTENER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address (default: 0.0.0.0)
    #[arg(long, env = "WEBHOOK_LISTENER_HOST")]
    pub host: Option<IpAddr>,

    /// Bind port (default: 8080)
    #[arg(long, env = "WEBHOOK_LISTENER_PORT")]
    pub port: Option<u16>,

    /// Reject bodies larger than this many bytes
    #[arg(long, env = "WEBHOOK_LISTENER_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,

    /// Diagnostic log format
    #[arg(long, value_enum, env = "WEBHOOK_LISTENER_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Replace fault text in error responses with a generic message
    #[arg(long, env = "WEBHOOK_LISTENER_HIDE_FAULT_DETAILS")]
    pub hide_fault_details: bool,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then overrides
    pub fn into_config(self) -> Result<ListenerConfig> {
        let mut config = match &self.config {
            Some(path) => ListenerConfig::from_file(path)?,
            None => ListenerConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(max_body_bytes) = self.max_body_bytes {
            config.max_body_bytes = Some(max_body_bytes);
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        if self.hide_fault_details {
            config.expose_fault_details = false;
        }

        config.validate()?;
        Ok(config)
    }
}
