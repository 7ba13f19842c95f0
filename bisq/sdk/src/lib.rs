// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Message types of the Bisq daemon gRPC API (package `io.bisq.protobuffer`).
//!
//! The messages carry the daemon's field tags so they can be encoded and decoded with `prost`.
//! Large shared types such as [`payment::PaymentAccount`] only model the fields this crate
//! exposes, the decoder skips everything else on the wire.

pub mod dispute;
pub mod methods;
pub mod offer;
pub mod payment;
pub mod price;
pub mod trade;
pub mod version;
pub mod wallet;

pub use dispute::DisputeAgentType;
pub use offer::{OfferDirection, OfferInfo};
pub use payment::{PaymentAccount, PaymentMethod};
pub use price::TradeStatistics3;
pub use trade::{AvailabilityResult, TradeInfo};
pub use wallet::{AddressBalanceInfo, BalancesInfo, TxFeeRateInfo, TxInfo};
