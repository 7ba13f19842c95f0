// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! `Wallets` service.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BsqBalanceInfo {
    #[prost(uint64, tag = "1")]
    pub available_confirmed_balance: u64,
    #[prost(uint64, tag = "2")]
    pub unverified_balance: u64,
    #[prost(uint64, tag = "3")]
    pub unconfirmed_change_balance: u64,
    #[prost(uint64, tag = "4")]
    pub locked_for_voting_balance: u64,
    #[prost(uint64, tag = "5")]
    pub lockup_bonds_balance: u64,
    #[prost(uint64, tag = "6")]
    pub unlocking_bonds_balance: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BtcBalanceInfo {
    #[prost(uint64, tag = "1")]
    pub available_balance: u64,
    #[prost(uint64, tag = "2")]
    pub reserved_balance: u64,
    #[prost(uint64, tag = "3")]
    pub total_available_balance: u64,
    #[prost(uint64, tag = "4")]
    pub locked_balance: u64,
}

/// Balances of both wallets. Only the one matching the requested currency is set when a currency
/// code was given.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BalancesInfo {
    #[prost(message, optional, tag = "1")]
    pub bsq: Option<BsqBalanceInfo>,
    #[prost(message, optional, tag = "2")]
    pub btc: Option<BtcBalanceInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressBalanceInfo {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(int64, tag = "2")]
    pub balance: i64,
    #[prost(int64, tag = "3")]
    pub num_confirmations: i64,
    #[prost(bool, tag = "4")]
    pub is_address_unused: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxFeeRateInfo {
    #[prost(bool, tag = "1")]
    pub use_custom_tx_fee_rate: bool,
    #[prost(uint64, tag = "2")]
    pub custom_tx_fee_rate: u64,
    #[prost(uint64, tag = "3")]
    pub fee_service_rate: u64,
    #[prost(uint64, tag = "4")]
    pub last_fee_service_request_ts: u64,
    #[prost(uint64, tag = "5")]
    pub min_fee_service_rate: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxInfo {
    #[prost(string, tag = "1")]
    pub tx_id: String,
    #[prost(uint64, tag = "2")]
    pub input_sum: u64,
    #[prost(uint64, tag = "3")]
    pub output_sum: u64,
    #[prost(uint64, tag = "4")]
    pub fee: u64,
    #[prost(int32, tag = "5")]
    pub size: i32,
    #[prost(bool, tag = "6")]
    pub is_pending: bool,
    #[prost(string, tag = "7")]
    pub memo: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBalancesRequest {
    #[prost(string, tag = "1")]
    pub currency_code: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBalancesReply {
    #[prost(message, optional, tag = "1")]
    pub balances: Option<BalancesInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAddressBalanceRequest {
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAddressBalanceReply {
    #[prost(message, optional, tag = "1")]
    pub address_balance_info: Option<AddressBalanceInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUnusedBsqAddressRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUnusedBsqAddressReply {
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendBsqRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub amount: String,
    #[prost(string, tag = "3")]
    pub tx_fee_rate: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendBsqReply {
    #[prost(message, optional, tag = "1")]
    pub tx_info: Option<TxInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendBtcRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub amount: String,
    #[prost(string, tag = "3")]
    pub tx_fee_rate: String,
    #[prost(string, tag = "4")]
    pub memo: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendBtcReply {
    #[prost(message, optional, tag = "1")]
    pub tx_info: Option<TxInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxFeeRateRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxFeeRateReply {
    #[prost(message, optional, tag = "1")]
    pub tx_fee_rate_info: Option<TxFeeRateInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetTxFeeRatePreferenceRequest {
    #[prost(uint64, tag = "1")]
    pub tx_fee_rate_preference: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetTxFeeRatePreferenceReply {
    #[prost(message, optional, tag = "1")]
    pub tx_fee_rate_info: Option<TxFeeRateInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsetTxFeeRatePreferenceRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsetTxFeeRatePreferenceReply {
    #[prost(message, optional, tag = "1")]
    pub tx_fee_rate_info: Option<TxFeeRateInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionRequest {
    #[prost(string, tag = "1")]
    pub tx_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionReply {
    #[prost(message, optional, tag = "1")]
    pub tx_info: Option<TxInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFundingAddressesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFundingAddressesReply {
    #[prost(message, repeated, tag = "1")]
    pub address_balance_info: Vec<AddressBalanceInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetWalletPasswordRequest {
    #[prost(string, tag = "1")]
    pub password: String,
    #[prost(string, tag = "2")]
    pub new_password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetWalletPasswordReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveWalletPasswordRequest {
    #[prost(string, tag = "1")]
    pub password: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveWalletPasswordReply {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LockWalletRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LockWalletReply {}

/// Unlocks the wallet for `timeout` seconds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnlockWalletRequest {
    #[prost(string, tag = "1")]
    pub password: String,
    #[prost(uint64, tag = "2")]
    pub timeout: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnlockWalletReply {}
