// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `Offers` service.

use strum::{AsRefStr, Display, EnumString};

/// Direction of an offer as seen by its maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum OfferDirection {
    Buy,
    Sell,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OfferInfo {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub direction: String,
    #[prost(uint64, tag = "3")]
    pub price: u64,
    #[prost(bool, tag = "4")]
    pub use_market_based_price: bool,
    #[prost(double, tag = "5")]
    pub market_price_margin: f64,
    #[prost(uint64, tag = "6")]
    pub amount: u64,
    #[prost(uint64, tag = "7")]
    pub min_amount: u64,
    #[prost(uint64, tag = "8")]
    pub volume: u64,
    #[prost(uint64, tag = "9")]
    pub min_volume: u64,
    #[prost(uint64, tag = "10")]
    pub buyer_security_deposit: u64,
    #[prost(uint64, tag = "11")]
    pub trigger_price: u64,
    #[prost(bool, tag = "12")]
    pub is_currency_for_maker_fee_btc: bool,
    #[prost(string, tag = "13")]
    pub payment_account_id: String,
    #[prost(string, tag = "14")]
    pub payment_method_id: String,
    #[prost(string, tag = "15")]
    pub payment_method_short_name: String,
    #[prost(string, tag = "16")]
    pub base_currency_code: String,
    #[prost(string, tag = "17")]
    pub counter_currency_code: String,
    #[prost(uint64, tag = "18")]
    pub date: u64,
    #[prost(string, tag = "19")]
    pub state: String,
    #[prost(uint64, tag = "20")]
    pub seller_security_deposit: u64,
    #[prost(string, tag = "21")]
    pub offer_fee_payment_tx_id: String,
    #[prost(uint64, tag = "22")]
    pub tx_fee: u64,
    #[prost(uint64, tag = "23")]
    pub maker_fee: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOfferRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOfferReply {
    #[prost(message, optional, tag = "1")]
    pub offer: Option<OfferInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMyOfferRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMyOfferReply {
    #[prost(message, optional, tag = "1")]
    pub offer: Option<OfferInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOffersRequest {
    #[prost(string, tag = "1")]
    pub direction: String,
    #[prost(string, tag = "2")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOffersReply {
    #[prost(message, repeated, tag = "1")]
    pub offers: Vec<OfferInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMyOffersRequest {
    #[prost(string, tag = "1")]
    pub direction: String,
    #[prost(string, tag = "2")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMyOffersReply {
    #[prost(message, repeated, tag = "1")]
    pub offers: Vec<OfferInfo>,
}

/// Parameters of a new offer. `price` is a fixed price string and is ignored when
/// `use_market_based_price` is set, in which case `market_price_margin` (percent) applies.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateOfferRequest {
    #[prost(string, tag = "1")]
    pub currency_code: String,
    #[prost(string, tag = "2")]
    pub direction: String,
    #[prost(string, tag = "3")]
    pub price: String,
    #[prost(bool, tag = "4")]
    pub use_market_based_price: bool,
    #[prost(double, tag = "5")]
    pub market_price_margin: f64,
    #[prost(uint64, tag = "6")]
    pub amount: u64,
    #[prost(uint64, tag = "7")]
    pub min_amount: u64,
    #[prost(double, tag = "8")]
    pub buyer_security_deposit: f64,
    #[prost(uint64, tag = "9")]
    pub trigger_price: u64,
    #[prost(string, tag = "10")]
    pub payment_account_id: String,
    #[prost(string, tag = "11")]
    pub maker_fee_currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateOfferReply {
    #[prost(message, optional, tag = "1")]
    pub offer: Option<OfferInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOfferRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOfferReply {}
