// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Provides a simple way of reading configuration files.
//!
//! Reads a TOML config file describing how to reach the daemon and deserializes it in a
//! type-safe way into a [`Config`] struct.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use url::Url;

use crate::credential::PasswordCredential;
use crate::error::ClientError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates a per-call timeout given in seconds.
pub fn check_timeout(secs: u64) -> Result<Duration, ClientError> {
    if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(ClientError::InvalidTimeout(secs));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a daemon address. A bare `host:port` is taken as plaintext `http`.
pub fn parse_rpc_url(s: &str) -> Result<Url, ClientError> {
    let s = s.trim();
    let url = if s.contains("://") {
        Url::parse(s)
    } else {
        Url::parse(&format!("http://{s}"))
    };
    url.map_err(|e| ClientError::InvalidEndpoint(format!("{s}: {e}")))
}

/// The top-level struct representing the config. Calls to [`Config::from_file`] deserialize into
/// this struct.
#[derive(Deserialize, Clone)]
pub struct Config {
    pub daemon: ClientConfig,
}

/// How to reach and authenticate against one daemon.
#[derive(Deserialize, Clone)]
pub struct ClientConfig {
    rpc_url: Url,
    password: String,
    #[serde(default = "default_timeout")]
    timeout: u64,
    #[serde(default = "default_connect_timeout")]
    connect_timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Config {
    /// Reads a TOML configuration in the `s` string and returns a [`Config`] struct.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        check_timeout(config.daemon.timeout)?;
        Ok(config)
    }

    /// Reads a TOML configuration file specified in the `path` and returns a [`Config`] struct.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml_str(contents.as_str())
    }
}

impl ClientConfig {
    pub fn new(rpc_url: Url, password: impl Into<String>) -> Self {
        Self {
            rpc_url,
            password: password.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Result<Self, ClientError> {
        check_timeout(secs)?;
        self.timeout = secs;
        Ok(self)
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout = secs;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = rpc_url;
        self
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn credential(&self) -> PasswordCredential {
        PasswordCredential::new(self.password.as_str())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}
