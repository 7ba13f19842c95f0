// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Connection lifecycle of the daemon client and the calls shared by all services.

use std::time::Duration;

use bisq_sdk::dispute::{RegisterDisputeAgentReply, RegisterDisputeAgentRequest};
use bisq_sdk::methods;
use bisq_sdk::version::{GetMethodHelpReply, GetMethodHelpRequest, GetVersionReply, GetVersionRequest};
use bisq_sdk::DisputeAgentType;
use prost::Message;

use crate::config::{check_timeout, ClientConfig};
use crate::error::ClientError;
use crate::transport::{CallOptions, Connector, GrpcConnector, RpcTransport};

/// Client of the daemon's gRPC API.
///
/// Every method checks the connection first, then sends one typed request bounded by the
/// configured timeout and returns the unwrapped reply or the daemon's status unchanged.
///
/// # Examples
/// ```no_run
/// use bisq_provider::{Client, ClientConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = ClientConfig::new("http://127.0.0.1:9998".parse().unwrap(), "xyz");
///     let mut client = Client::new(config);
///     client.connect().await.unwrap();
///     println!("version: {:?}", client.get_version().await);
///     client.close().unwrap();
/// }
/// ```
pub struct Client<C: Connector = GrpcConnector> {
    config: ClientConfig,
    timeout: Duration,
    connector: C,
    transport: Option<C::Transport>,
}

impl Client<GrpcConnector> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_connector(config, GrpcConnector)
    }
}

impl<C: Connector> Client<C> {
    pub fn with_connector(config: ClientConfig, connector: C) -> Self {
        Self {
            timeout: config.timeout(),
            config,
            connector,
            transport: None,
        }
    }

    /// Sets the per-call timeout in seconds, accepted range is 1 to 300.
    pub fn set_timeout(&mut self, secs: u64) -> Result<(), ClientError> {
        self.timeout = check_timeout(secs)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Dials the daemon and waits until the connection is up.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        if self.transport.is_some() {
            return Err(ClientError::AlreadyConnected);
        }
        let transport = self.connector.connect(&self.config).await?;
        self.transport = Some(transport);
        log::info!("connected to daemon at {}", self.config.rpc_url());
        Ok(())
    }

    /// Drops the connection. The client can be connected again afterwards.
    pub fn close(&mut self) -> Result<(), ClientError> {
        match self.transport.take() {
            Some(transport) => {
                drop(transport);
                log::info!("closed connection to daemon at {}", self.config.rpc_url());
                Ok(())
            }
            None => Err(ClientError::NotConnected),
        }
    }

    pub async fn get_version(&self) -> Result<String, ClientError> {
        let r = self
            .call::<_, GetVersionReply>(methods::version::GET_VERSION, GetVersionRequest {})
            .await?;
        log::debug!("received get_version response: {r:?}");
        Ok(r.version)
    }

    /// Returns the daemon's help text for one of its API methods.
    pub async fn get_method_help(&self, method_name: &str) -> Result<String, ClientError> {
        let request = GetMethodHelpRequest {
            method_name: method_name.to_string(),
        };
        let r = self
            .call::<_, GetMethodHelpReply>(methods::help::GET_METHOD_HELP, request)
            .await?;
        log::debug!("received get_method_help response: {r:?}");
        Ok(r.method_help)
    }

    /// Registers this node as a dispute agent. Accepted by regtest daemons only.
    pub async fn register_dispute_agent(
        &self,
        agent_type: DisputeAgentType,
        registration_key: &str,
    ) -> Result<(), ClientError> {
        let request = RegisterDisputeAgentRequest {
            dispute_agent_type: agent_type.to_string(),
            registration_key: registration_key.to_string(),
        };
        self.call::<_, RegisterDisputeAgentReply>(
            methods::dispute_agents::REGISTER_DISPUTE_AGENT,
            request,
        )
        .await?;
        Ok(())
    }

    fn transport(&self) -> Result<&C::Transport, ClientError> {
        self.transport.as_ref().ok_or(ClientError::NotConnected)
    }

    pub(crate) async fn call<Req, Reply>(
        &self,
        path: &'static str,
        request: Req,
    ) -> Result<Reply, ClientError>
    where
        Req: Message + Send + Sync + 'static,
        Reply: Message + Default + Send + Sync + 'static,
    {
        self.call_with(path, request, CallOptions::new(self.timeout))
            .await
    }

    pub(crate) async fn call_with<Req, Reply>(
        &self,
        path: &'static str,
        request: Req,
        options: CallOptions,
    ) -> Result<Reply, ClientError>
    where
        Req: Message + Send + Sync + 'static,
        Reply: Message + Default + Send + Sync + 'static,
    {
        let transport = self.transport()?;
        log::trace!("calling {path}");
        let reply = transport.unary(path, request, options).await?;
        Ok(reply)
    }
}
