// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! In-memory connector used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prost::Message;
use tonic::{Code, Status};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{CallOptions, Connector, RpcTransport};
use crate::Client;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub path: &'static str,
    pub request: Vec<u8>,
    pub options: CallOptions,
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<&'static str, Result<Vec<u8>, (Code, String)>>>,
    calls: Mutex<Vec<RecordedCall>>,
    connects: AtomicUsize,
    refuse: AtomicBool,
}

/// Serves canned replies per method path and records every call. Methods without a canned reply
/// answer with an empty message.
#[derive(Clone, Default)]
pub(crate) struct MockConnector {
    state: Arc<MockState>,
}

impl MockConnector {
    pub fn reply<M: Message>(&self, path: &'static str, reply: M) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(path, Ok(reply.encode_to_vec()));
    }

    pub fn fail(&self, path: &'static str, code: Code, message: &str) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(path, Err((code, message.to_string())));
    }

    pub fn refuse_connections(&self) {
        self.state.refuse.store(true, Ordering::SeqCst);
    }

    pub fn connects(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Decodes the request of the most recent call to `path`.
    pub fn last_request<M: Message + Default>(&self, path: &'static str) -> M {
        let calls = self.calls();
        let call = calls
            .iter()
            .rev()
            .find(|c| c.path == path)
            .unwrap_or_else(|| panic!("no call to {path}"));
        M::decode(call.request.as_slice()).unwrap()
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Transport = MockTransport;

    async fn connect(&self, _config: &ClientConfig) -> Result<MockTransport, ClientError> {
        if self.state.refuse.load(Ordering::SeqCst) {
            return Err(ClientError::Rpc(Status::unavailable("connection refused")));
        }
        self.state.connects.fetch_add(1, Ordering::SeqCst);
        Ok(MockTransport {
            state: self.state.clone(),
        })
    }
}

pub(crate) struct MockTransport {
    state: Arc<MockState>,
}

#[async_trait]
impl RpcTransport for MockTransport {
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
        self.state.calls.lock().unwrap().push(RecordedCall {
            path,
            request: request.encode_to_vec(),
            options,
        });

        let reply = self.state.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Ok(bytes)) => {
                Reply::decode(bytes.as_slice()).map_err(|e| Status::internal(e.to_string()))
            }
            Some(Err((code, message))) => Err(Status::new(code, message)),
            None => Ok(Reply::default()),
        }
    }
}

pub(crate) fn config() -> ClientConfig {
    ClientConfig::new(Url::parse("http://127.0.0.1:9998").unwrap(), "xyz")
}

/// A client connected through a fresh [`MockConnector`].
pub(crate) async fn connected_client() -> (Client<MockConnector>, MockConnector) {
    let connector = MockConnector::default();
    let mut client = Client::with_connector(config(), connector.clone());
    client.connect().await.unwrap();
    (client, connector)
}

/// A client that never connected.
pub(crate) fn idle_client() -> Client<MockConnector> {
    Client::with_connector(config(), MockConnector::default())
}
