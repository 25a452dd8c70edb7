use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Output format of the diagnostic log stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
    /// Address to bind the listener on
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to bind the listener on, 0 lets the OS pick one
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted body size in bytes, unbounded when unset
    #[serde(default)]
    pub max_body_bytes: Option<usize>,

    /// Whether the raw fault text is returned to callers on a bad body
    #[serde(default = "default_expose_fault_details")]
    pub expose_fault_details: bool,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: None,
            expose_fault_details: default_expose_fault_details(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_expose_fault_details() -> bool {
    true
}

impl ListenerConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_body_bytes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than zero when set".to_string(),
            ));
        }

        Ok(())
    }
}
