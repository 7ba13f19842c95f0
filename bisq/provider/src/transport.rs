// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! The seam between the client and the wire.
//!
//! [`Connector`] dials the daemon and yields an [`RpcTransport`] which performs single unary
//! calls. The production implementation is [`GrpcConnector`], backed by a `tonic` channel.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use prost::Message;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::Status;
use url::Url;

use crate::config::ClientConfig;
use crate::credential::PasswordInterceptor;
use crate::error::ClientError;

const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// Per call settings handed to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    /// Deadline of the whole call, sent to the daemon and enforced locally.
    pub timeout: Duration,
    /// Overrides the default 4 MiB receive limit.
    pub max_decoding_message_size: Option<usize>,
}

impl CallOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            max_decoding_message_size: None,
        }
    }

    pub fn with_max_decoding_message_size(mut self, limit: usize) -> Self {
        self.max_decoding_message_size = Some(limit);
        self
    }
}

/// Performs unary calls against an established connection.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Sends `request` to the method at `path` and waits for its reply.
    async fn unary<Req, Reply>(
        &self,
        path: &'static str,
        request: Req,
        options: CallOptions,
    ) -> Result<Reply, Status>
    where
        Req: Message + Send + Sync + 'static,
        Reply: Message + Default + Send + Sync + 'static;
}

/// Establishes connections to the daemon.
#[async_trait]
pub trait Connector: Send + Sync {
    type Transport: RpcTransport;

    async fn connect(&self, config: &ClientConfig) -> Result<Self::Transport, ClientError>;
}

/// Dials the daemon over HTTP/2 with `tonic`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrpcConnector;

#[async_trait]
impl Connector for GrpcConnector {
    type Transport = GrpcTransport;

    async fn connect(&self, config: &ClientConfig) -> Result<GrpcTransport, ClientError> {
        let interceptor = config.credential().interceptor()?;

        let url = config.rpc_url();
        let endpoint = match url.scheme() {
            "http" => Endpoint::from_shared(url.to_string())?,
            "https" => Endpoint::from_shared(url.to_string())?
                .tls_config(ClientTlsConfig::new().with_native_roots())?,
            scheme => {
                return Err(ClientError::InvalidEndpoint(format!(
                    "unsupported scheme `{scheme}` in {url}"
                )))
            }
        }
        .connect_timeout(config.connect_timeout())
        .tcp_keepalive(Some(TCP_KEEPALIVE));

        log::debug!("dialing daemon at {url}");
        let channel = dial(url, config.connect_timeout(), endpoint.connect()).await?;

        Ok(GrpcTransport {
            channel: InterceptedService::new(channel, interceptor),
        })
    }
}

/// Bounds `connecting` by `timeout`, reporting expiry as [`ClientError::ConnectTimeout`].
async fn dial<T, F>(url: &Url, timeout: Duration, connecting: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, tonic::transport::Error>>,
{
    match tokio::time::timeout(timeout, connecting).await {
        Ok(connected) => Ok(connected?),
        Err(_) => Err(ClientError::ConnectTimeout(url.to_string(), timeout)),
    }
}

/// An established `tonic` channel carrying the API password on every call.
#[derive(Clone)]
pub struct GrpcTransport {
    channel: InterceptedService<Channel, PasswordInterceptor>,
}

#[async_trait]
impl RpcTransport for GrpcTransport {
    async fn unary<Req, Reply>(
        &self,
        path: &'static str,
        request: Req,
        options: CallOptions,
    ) -> Result<Reply, Status>
    where
        Req: Message + Send + Sync + 'static,
        Reply: Message + Default + Send + Sync + 'static,
    {
        let mut grpc = Grpc::new(self.channel.clone());
        if let Some(limit) = options.max_decoding_message_size {
            grpc = grpc.max_decoding_message_size(limit);
        }
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("service was not ready: {e}")))?;

        let mut request = tonic::Request::new(request);
        request.set_timeout(options.timeout);

        let codec = ProstCodec::<Req, Reply>::default();
        let call = grpc.unary(request, PathAndQuery::from_static(path), codec);
        match tokio::time::timeout(options.timeout, call).await {
            Ok(response) => response.map(tonic::Response::into_inner),
            Err(_) => Err(Status::deadline_exceeded(format!(
                "{path} did not complete within {:?}",
                options.timeout
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use url::Url;

    use super::{dial, CallOptions, Connector, GrpcConnector};
    use crate::config::ClientConfig;
    use crate::error::ClientError;

    fn config(url: &str) -> ClientConfig {
        ClientConfig::new(Url::parse(url).unwrap(), "xyz").with_connect_timeout(2)
    }

    #[tokio::test]
    async fn rejects_unknown_scheme() {
        let r = GrpcConnector.connect(&config("ftp://127.0.0.1:9998")).await;
        assert!(matches!(r, Err(ClientError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn rejects_password_before_dialing() {
        let config = config("http://127.0.0.1:9998").with_password("pässwort");
        let r = GrpcConnector.connect(&config).await;
        assert!(matches!(r, Err(ClientError::InvalidCredential)));
    }

    #[tokio::test]
    async fn refused_connection_is_reported() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let r = GrpcConnector
            .connect(&config(&format!("http://127.0.0.1:{port}")))
            .await;
        assert!(r.is_err());
    }

    #[tokio::test]
    async fn dialing_past_connect_timeout() {
        let url = Url::parse("http://127.0.0.1:9998").unwrap();
        let timeout = Duration::from_millis(50);
        let stalled = std::future::pending::<Result<(), tonic::transport::Error>>();

        match dial(&url, timeout, stalled).await {
            Err(e @ ClientError::ConnectTimeout(..)) => assert_eq!(e.code(), None),
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn call_options_limit() {
        let options = CallOptions::new(Duration::from_secs(1)).with_max_decoding_message_size(10);
        assert_eq!(options.max_decoding_message_size, Some(10));
        assert_eq!(CallOptions::new(Duration::from_secs(1)).max_decoding_message_size, None);
    }
}
