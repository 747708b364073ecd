// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Listening port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;
/// Data file when `TALKERS_DATA` is unset
pub const DEFAULT_DATA_PATH: &str = "talker.json";

pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "TALKERS_HOST";
pub const DATA_VAR: &str = "TALKERS_DATA";
pub const LOG_VAR: &str = "TALKERS_LOG";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("invalid TALKERS_HOST value: {0:?}")]
    InvalidHost(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind (0 picks a free port)
    pub port: u16,
    /// JSON file holding the talker collection
    pub data_path: PathBuf,
    /// Log file; stderr when unset
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_path: None,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(host) = get(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host))?;
        }
        if let Some(data) = get(DATA_VAR) {
            config.data_path = PathBuf::from(data);
        }
        config.log_path = get(LOG_VAR).map(PathBuf::from);

        Ok(config)
    }

    /// Override the data file (e.g. from a command-line argument)
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
