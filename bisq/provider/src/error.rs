// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use std::time::Duration;

use thiserror::Error;

/// The error enum that can be used across the crate.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client already connected")]
    AlreadyConnected,
    #[error("client not connected")]
    NotConnected,
    #[error("invalid timeout value ({0})")]
    InvalidTimeout(u64),
    #[error("invalid daemon endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("password cannot be sent as request metadata")]
    InvalidCredential,
    /// Dialing did not finish within the connect timeout. No call reached the daemon.
    #[error("no connection to {0} within {1:?}")]
    ConnectTimeout(String, Duration),
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    /// The status returned by the daemon, passed through unchanged.
    #[error("rpc error: code = {:?} desc = {}", .0.code(), .0.message())]
    Rpc(#[from] tonic::Status),
    #[error("daemon reply is missing `{0}`")]
    MissingField(&'static str),
    #[error("offer not taken ({0:?}): {1}")]
    OfferNotTaken(bisq_sdk::AvailabilityResult, String),
    #[error("cannot decode daemon json: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The gRPC status code when the error came from the daemon or the call deadline. Local
    /// failures before any call, a connect timeout included, have none.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ClientError::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }
}
