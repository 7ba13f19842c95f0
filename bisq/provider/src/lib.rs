// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Client of the Bisq daemon's gRPC API.
//!
//! A [`Client`] is built from a [`ClientConfig`], connected once with [`Client::connect`] and then
//! exposes one async method per daemon RPC: offers, trades, market prices, payment accounts and
//! the BTC/BSQ wallet. Every call carries the API password as request metadata and is bounded by
//! the client's timeout.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod offer;
pub mod payment;
pub mod trade;
pub mod transport;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use bisq_sdk as sdk;
pub use client::Client;
pub use config::{parse_rpc_url, ClientConfig, Config};
pub use credential::PasswordCredential;
pub use error::ClientError;
pub use payment::PaymentAccountForm;
pub use transport::{CallOptions, Connector, GrpcConnector, GrpcTransport, RpcTransport};
