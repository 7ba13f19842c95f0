// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Command line client of the Bisq daemon.

use std::fmt::Debug;
use std::path::PathBuf;

use anyhow::anyhow;
use async_trait::async_trait;
use bisq_provider::{parse_rpc_url, Client, ClientConfig, Config};
use clap::Args;

mod commands;

pub use commands::cli;

/// Daemon address used when neither a config file nor `--rpc-url` names one.
pub const DEFAULT_RPC_URL: &str = "localhost:9998";

/// The trait that represents the abstraction of a command line handler. To implement a new command
/// line operation, implement this trait and register it in the `Commands` enum of its group.
///
/// Handlers are stateless, everything they need comes from the global and their own arguments.
#[async_trait]
pub trait CommandLineHandler {
    /// The arguments of the command, also used to generate its command line options.
    type Arguments: Debug + Args;

    /// Runs the command.
    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()>;
}

/// Options shared by every command. They have to be passed before the subcommand.
#[derive(Args)]
pub struct GlobalArguments {
    #[arg(long = "config", help = "Path to the client config file")]
    config_path: Option<PathBuf>,
    #[arg(
        long,
        env = "BISQ_API_HOST",
        help = "Daemon address, either `host:port` or a full url"
    )]
    rpc_url: Option<String>,
    #[arg(
        long,
        env = "BISQ_API_PASSWORD",
        hide_env_values = true,
        help = "The daemon's api password"
    )]
    password: Option<String>,
    #[arg(
        long,
        env = "BISQ_API_TIMEOUT",
        help = "Timeout of every call in seconds, 1 to 300"
    )]
    timeout: Option<u64>,
}

impl Debug for GlobalArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArguments")
            .field("config_path", &self.config_path)
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GlobalArguments {
    /// The client config from the config file, if any, with the command line overrides applied.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let rpc_url = self.rpc_url.as_deref().map(parse_rpc_url).transpose()?;

        let mut config = match &self.config_path {
            Some(path) => Config::from_file(path)?.daemon,
            None => {
                let password = self.password.as_deref().ok_or_else(|| {
                    anyhow!("no api password, pass --password or set BISQ_API_PASSWORD")
                })?;
                ClientConfig::new(parse_rpc_url(DEFAULT_RPC_URL)?, password)
            }
        };

        if let Some(url) = rpc_url {
            config = config.with_rpc_url(url);
        }
        if let Some(password) = &self.password {
            config = config.with_password(password.as_str());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout)?;
        }
        Ok(config)
    }

    /// A client already connected to the daemon.
    pub async fn connect(&self) -> anyhow::Result<Client> {
        let config = self.client_config()?;
        log::debug!("connecting to daemon at {}", config.rpc_url());

        let mut client = Client::new(config);
        client.connect().await?;
        Ok(client)
    }
}
