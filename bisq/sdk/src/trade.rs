// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `Trades` service.

use crate::offer::OfferInfo;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeInfo {
    #[prost(message, optional, tag = "1")]
    pub offer: Option<OfferInfo>,
    #[prost(string, tag = "2")]
    pub trade_id: String,
    #[prost(string, tag = "3")]
    pub short_id: String,
    #[prost(uint64, tag = "4")]
    pub date: u64,
    #[prost(string, tag = "5")]
    pub role: String,
    #[prost(bool, tag = "6")]
    pub is_currency_for_taker_fee_btc: bool,
    #[prost(uint64, tag = "7")]
    pub tx_fee_as_long: u64,
    #[prost(uint64, tag = "8")]
    pub taker_fee_as_long: u64,
    #[prost(string, tag = "9")]
    pub taker_fee_tx_id: String,
    #[prost(string, tag = "10")]
    pub deposit_tx_id: String,
    #[prost(string, tag = "11")]
    pub payout_tx_id: String,
    #[prost(uint64, tag = "12")]
    pub trade_amount_as_long: u64,
    #[prost(uint64, tag = "13")]
    pub trade_price: u64,
    #[prost(string, tag = "14")]
    pub trading_peer_node_address: String,
    #[prost(string, tag = "15")]
    pub state: String,
    #[prost(string, tag = "16")]
    pub phase: String,
    #[prost(string, tag = "17")]
    pub trade_period_state: String,
    #[prost(bool, tag = "18")]
    pub is_deposit_published: bool,
    #[prost(bool, tag = "19")]
    pub is_deposit_confirmed: bool,
    #[prost(bool, tag = "20")]
    pub is_fiat_sent: bool,
    #[prost(bool, tag = "21")]
    pub is_fiat_received: bool,
    #[prost(bool, tag = "22")]
    pub is_payout_published: bool,
    #[prost(bool, tag = "23")]
    pub is_withdrawn: bool,
    #[prost(string, tag = "24")]
    pub contract_as_json: String,
}

/// Why an offer could not be taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AvailabilityResult {
    PbError = 0,
    UnknownFailure = 1,
    Available = 2,
    OfferTaken = 3,
    PriceOutOfTolerance = 4,
    MarketPriceNotAvailable = 5,
    NoArbitrators = 6,
    NoMediators = 7,
    UserIgnored = 8,
    MissingMandatoryCapability = 9,
    NoRefundAgents = 10,
    UnconfTxLimitHit = 11,
    MakerDeniedApiUser = 12,
    PriceCheckFailed = 13,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AvailabilityResultWithDescription {
    #[prost(enumeration = "AvailabilityResult", tag = "1")]
    pub availability_result: i32,
    #[prost(string, tag = "2")]
    pub description: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradeRequest {
    #[prost(string, tag = "1")]
    pub trade_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradeReply {
    #[prost(message, optional, tag = "1")]
    pub trade: Option<TradeInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TakeOfferRequest {
    #[prost(string, tag = "1")]
    pub offer_id: String,
    #[prost(string, tag = "2")]
    pub payment_account_id: String,
    #[prost(string, tag = "3")]
    pub taker_fee_currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TakeOfferReply {
    #[prost(message, optional, tag = "1")]
    pub trade: Option<TradeInfo>,
    #[prost(message, optional, tag = "2")]
    pub failure_reason: Option<AvailabilityResultWithDescription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmPaymentStartedRequest {
    #[prost(string, tag = "1")]
    pub trade_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmPaymentStartedReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmPaymentReceivedRequest {
    #[prost(string, tag = "1")]
    pub trade_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmPaymentReceivedReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeepFundsRequest {
    #[prost(string, tag = "1")]
    pub trade_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeepFundsReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WithdrawFundsRequest {
    #[prost(string, tag = "1")]
    pub trade_id: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(string, tag = "3")]
    pub memo: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WithdrawFundsReply {}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::{AvailabilityResult, AvailabilityResultWithDescription, TakeOfferReply};

    #[test]
    fn failure_reason_decodes_enum() {
        let reply = TakeOfferReply {
            trade: None,
            failure_reason: Some(AvailabilityResultWithDescription {
                availability_result: AvailabilityResult::OfferTaken as i32,
                description: "offer was already taken".to_string(),
            }),
        };

        let decoded = TakeOfferReply::decode(reply.encode_to_vec().as_slice()).unwrap();
        let reason = decoded.failure_reason.unwrap();
        assert_eq!(reason.availability_result(), AvailabilityResult::OfferTaken);
        assert!(decoded.trade.is_none());
    }

    #[test]
    fn unknown_availability_falls_back_to_default() {
        let reason = AvailabilityResultWithDescription {
            availability_result: 99,
            description: String::new(),
        };
        assert_eq!(reason.availability_result(), AvailabilityResult::PbError);
    }
}
