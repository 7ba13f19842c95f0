// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! gRPC paths of the daemon's unary methods, grouped by service.

pub mod version {
    pub const GET_VERSION: &str = "/io.bisq.protobuffer.GetVersion/GetVersion";
}

pub mod help {
    pub const GET_METHOD_HELP: &str = "/io.bisq.protobuffer.Help/GetMethodHelp";
}

pub mod dispute_agents {
    pub const REGISTER_DISPUTE_AGENT: &str =
        "/io.bisq.protobuffer.DisputeAgents/RegisterDisputeAgent";
}

pub mod offers {
    pub const GET_OFFER: &str = "/io.bisq.protobuffer.Offers/GetOffer";
    pub const GET_MY_OFFER: &str = "/io.bisq.protobuffer.Offers/GetMyOffer";
    pub const GET_OFFERS: &str = "/io.bisq.protobuffer.Offers/GetOffers";
    pub const GET_MY_OFFERS: &str = "/io.bisq.protobuffer.Offers/GetMyOffers";
    pub const CREATE_OFFER: &str = "/io.bisq.protobuffer.Offers/CreateOffer";
    pub const CANCEL_OFFER: &str = "/io.bisq.protobuffer.Offers/CancelOffer";
}

pub mod payment_accounts {
    pub const CREATE_PAYMENT_ACCOUNT: &str =
        "/io.bisq.protobuffer.PaymentAccounts/CreatePaymentAccount";
    pub const GET_PAYMENT_ACCOUNTS: &str = "/io.bisq.protobuffer.PaymentAccounts/GetPaymentAccounts";
    pub const GET_PAYMENT_METHODS: &str = "/io.bisq.protobuffer.PaymentAccounts/GetPaymentMethods";
    pub const GET_PAYMENT_ACCOUNT_FORM: &str =
        "/io.bisq.protobuffer.PaymentAccounts/GetPaymentAccountForm";
}

pub mod price {
    pub const GET_MARKET_PRICE: &str = "/io.bisq.protobuffer.Price/GetMarketPrice";
}

pub mod trade_statistics {
    pub const GET_TRADE_STATISTICS: &str =
        "/io.bisq.protobuffer.GetTradeStatistics/GetTradeStatistics";
}

pub mod trades {
    pub const GET_TRADE: &str = "/io.bisq.protobuffer.Trades/GetTrade";
    pub const TAKE_OFFER: &str = "/io.bisq.protobuffer.Trades/TakeOffer";
    pub const CONFIRM_PAYMENT_STARTED: &str = "/io.bisq.protobuffer.Trades/ConfirmPaymentStarted";
    pub const CONFIRM_PAYMENT_RECEIVED: &str = "/io.bisq.protobuffer.Trades/ConfirmPaymentReceived";
    pub const KEEP_FUNDS: &str = "/io.bisq.protobuffer.Trades/KeepFunds";
    pub const WITHDRAW_FUNDS: &str = "/io.bisq.protobuffer.Trades/WithdrawFunds";
}

pub mod wallets {
    pub const GET_BALANCES: &str = "/io.bisq.protobuffer.Wallets/GetBalances";
    pub const GET_ADDRESS_BALANCE: &str = "/io.bisq.protobuffer.Wallets/GetAddressBalance";
    pub const GET_UNUSED_BSQ_ADDRESS: &str = "/io.bisq.protobuffer.Wallets/GetUnusedBsqAddress";
    pub const SEND_BSQ: &str = "/io.bisq.protobuffer.Wallets/SendBsq";
    pub const SEND_BTC: &str = "/io.bisq.protobuffer.Wallets/SendBtc";
    pub const GET_TX_FEE_RATE: &str = "/io.bisq.protobuffer.Wallets/GetTxFeeRate";
    pub const SET_TX_FEE_RATE_PREFERENCE: &str =
        "/io.bisq.protobuffer.Wallets/SetTxFeeRatePreference";
    pub const UNSET_TX_FEE_RATE_PREFERENCE: &str =
        "/io.bisq.protobuffer.Wallets/UnsetTxFeeRatePreference";
    pub const GET_TRANSACTION: &str = "/io.bisq.protobuffer.Wallets/GetTransaction";
    pub const GET_FUNDING_ADDRESSES: &str = "/io.bisq.protobuffer.Wallets/GetFundingAddresses";
    pub const SET_WALLET_PASSWORD: &str = "/io.bisq.protobuffer.Wallets/SetWalletPassword";
    pub const REMOVE_WALLET_PASSWORD: &str = "/io.bisq.protobuffer.Wallets/RemoveWalletPassword";
    pub const LOCK_WALLET: &str = "/io.bisq.protobuffer.Wallets/LockWallet";
    pub const UNLOCK_WALLET: &str = "/io.bisq.protobuffer.Wallets/UnlockWallet";
}
