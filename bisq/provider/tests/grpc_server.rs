// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Calls through a real HTTP/2 channel against an in-process daemon stand-in.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bisq_provider::sdk::methods;
use bisq_provider::sdk::version::{GetVersionReply, GetVersionRequest};
use bisq_provider::{Client, ClientConfig};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::{http, Body, BoxFuture, Context, Poll, Service, StdError};
use tonic::server::{NamedService, UnaryService};
use tonic::transport::Server;
use tonic::Code;
use url::Url;

const VERSION: &str = "1.9.17";

/// Headers of one received call.
#[derive(Debug, Clone)]
struct Seen {
    path: String,
    password: Option<String>,
    grpc_timeout: Option<String>,
}

/// Answers `GetVersion`, optionally after sleeping past any sensible deadline.
#[derive(Clone, Default)]
struct FakeDaemon {
    seen: Arc<Mutex<Vec<Seen>>>,
    stall: Arc<AtomicBool>,
}

impl FakeDaemon {
    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

struct GetVersionSvc {
    stall: bool,
}

impl UnaryService<GetVersionRequest> for GetVersionSvc {
    type Response = GetVersionReply;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, _request: tonic::Request<GetVersionRequest>) -> Self::Future {
        let stall = self.stall;
        Box::pin(async move {
            if stall {
                tokio::time::sleep(Duration::from_secs(3)).await;
            }
            Ok(tonic::Response::new(GetVersionReply {
                version: VERSION.to_string(),
            }))
        })
    }
}

impl<B> Service<http::Request<B>> for FakeDaemon
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.seen.lock().unwrap().push(Seen {
            path: req.uri().path().to_string(),
            password: header("password"),
            grpc_timeout: header("grpc-timeout"),
        });

        let method = GetVersionSvc {
            stall: self.stall.load(Ordering::SeqCst),
        };
        Box::pin(async move {
            let codec = tonic::codec::ProstCodec::<GetVersionReply, GetVersionRequest>::default();
            let mut grpc = tonic::server::Grpc::new(codec);
            Ok(grpc.unary(method, req).await)
        })
    }
}

impl NamedService for FakeDaemon {
    const NAME: &'static str = "io.bisq.protobuffer.GetVersion";
}

async fn serve(daemon: FakeDaemon) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(
        Server::builder()
            .add_service(daemon)
            .serve_with_incoming(TcpListenerStream::new(listener)),
    );
    Url::parse(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn password_and_deadline_reach_the_daemon() {
    let daemon = FakeDaemon::default();
    let url = serve(daemon.clone()).await;

    let mut client = Client::new(ClientConfig::new(url, "xyz"));
    client.connect().await.unwrap();
    assert_eq!(client.get_version().await.unwrap(), VERSION);

    let seen = daemon.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, methods::version::GET_VERSION);
    assert_eq!(seen[0].password.as_deref(), Some("xyz"));
    let timeout = seen[0].grpc_timeout.as_deref().unwrap();
    assert!(!timeout.is_empty());

    client.close().unwrap();
}

#[tokio::test]
async fn stalled_call_exceeds_deadline() {
    let daemon = FakeDaemon::default();
    let url = serve(daemon.clone()).await;

    let mut client = Client::new(ClientConfig::new(url, "xyz"));
    client.connect().await.unwrap();
    client.set_timeout(1).unwrap();
    daemon.stall.store(true, Ordering::SeqCst);

    let started = tokio::time::Instant::now();
    let e = client.get_version().await.unwrap_err();
    assert_eq!(e.code(), Some(Code::DeadlineExceeded));
    assert!(started.elapsed() < Duration::from_secs(3));

    let seen = daemon.seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].grpc_timeout.is_some());
}
