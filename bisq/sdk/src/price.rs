// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `Price` and `GetTradeStatistics` services.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketPriceRequest {
    #[prost(string, tag = "1")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketPriceReply {
    #[prost(double, tag = "1")]
    pub price: f64,
}

/// A completed trade as published on the network.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeStatistics3 {
    #[prost(string, tag = "1")]
    pub currency: String,
    #[prost(int64, tag = "2")]
    pub price: i64,
    #[prost(int64, tag = "3")]
    pub amount: i64,
    #[prost(string, tag = "4")]
    pub payment_method: String,
    #[prost(int64, tag = "5")]
    pub date: i64,
    #[prost(string, tag = "6")]
    pub mediator: String,
    #[prost(string, tag = "7")]
    pub refund_agent: String,
    #[prost(bytes = "vec", tag = "8")]
    pub hash: Vec<u8>,
    #[prost(map = "string, string", tag = "9")]
    pub extra_data: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradeStatisticsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradeStatisticsReply {
    #[prost(message, repeated, tag = "1")]
    pub trade_statistics: Vec<TradeStatistics3>,
}
