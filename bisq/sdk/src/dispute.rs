// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `DisputeAgents` service.

use strum::{AsRefStr, Display, EnumString};

/// The kind of dispute agent a node registers as. Only usable on regtest daemons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisputeAgentType {
    Mediator,
    RefundAgent,
    Arbitrator,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterDisputeAgentRequest {
    #[prost(string, tag = "1")]
    pub dispute_agent_type: String,
    #[prost(string, tag = "2")]
    pub registration_key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterDisputeAgentReply {}
