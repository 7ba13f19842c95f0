// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `GetVersion` and `Help` services.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionReply {
    #[prost(string, tag = "1")]
    pub version: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMethodHelpRequest {
    #[prost(string, tag = "1")]
    pub method_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMethodHelpReply {
    #[prost(string, tag = "1")]
    pub method_help: String,
}
