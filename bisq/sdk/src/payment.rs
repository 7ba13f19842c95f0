// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `PaymentAccounts` service.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentMethod {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int64, tag = "2")]
    pub max_trade_period: i64,
    #[prost(int64, tag = "3")]
    pub max_trade_limit: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeCurrency {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

/// The method specific part of an account. The per-method payload variants are not modelled,
/// `exclude_from_json_data` carries the free-form extras.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentAccountPayload {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub payment_method_id: String,
    #[prost(int64, tag = "3")]
    pub max_trade_period: i64,
    #[prost(map = "string, string", tag = "15")]
    pub exclude_from_json_data: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentAccount {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int64, tag = "2")]
    pub creation_date: i64,
    #[prost(message, optional, tag = "3")]
    pub payment_method: Option<PaymentMethod>,
    #[prost(string, tag = "4")]
    pub account_name: String,
    #[prost(message, repeated, tag = "5")]
    pub trade_currencies: Vec<TradeCurrency>,
    #[prost(message, optional, tag = "6")]
    pub selected_trade_currency: Option<TradeCurrency>,
    #[prost(message, optional, tag = "7")]
    pub payment_account_payload: Option<PaymentAccountPayload>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePaymentAccountRequest {
    #[prost(string, tag = "1")]
    pub payment_account_form: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePaymentAccountReply {
    #[prost(message, optional, tag = "1")]
    pub payment_account: Option<PaymentAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentAccountsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentAccountsReply {
    #[prost(message, repeated, tag = "1")]
    pub payment_accounts: Vec<PaymentAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentMethodsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentMethodsReply {
    #[prost(message, repeated, tag = "1")]
    pub payment_methods: Vec<PaymentMethod>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentAccountFormRequest {
    #[prost(string, tag = "1")]
    pub payment_method_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentAccountFormReply {
    #[prost(string, tag = "1")]
    pub payment_account_form_json: String,
}
