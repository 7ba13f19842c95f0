// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Transaction fee rate cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct TxFeeRate;

#[async_trait]
impl CommandLineHandler for TxFeeRate {
    type Arguments = TxFeeRateArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get tx fee rate with args: {:?}", arguments);

        let client = global.connect().await?;
        print_reply(&client.get_tx_fee_rate().await?);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the transaction fee rate")]
pub(crate) struct TxFeeRateArgs {}

pub(crate) struct SetTxFeeRate;

#[async_trait]
impl CommandLineHandler for SetTxFeeRate {
    type Arguments = SetTxFeeRateArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("set tx fee rate with args: {:?}", arguments);

        let client = global.connect().await?;
        let info = client
            .set_tx_fee_rate_preference(arguments.tx_fee_rate)
            .await?;
        print_reply(&info);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Use a custom transaction fee rate")]
pub(crate) struct SetTxFeeRateArgs {
    #[arg(help = "Fee rate in sats/byte")]
    pub tx_fee_rate: u64,
}

pub(crate) struct UnsetTxFeeRate;

#[async_trait]
impl CommandLineHandler for UnsetTxFeeRate {
    type Arguments = UnsetTxFeeRateArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("unset tx fee rate with args: {:?}", arguments);

        let client = global.connect().await?;
        print_reply(&client.unset_tx_fee_rate_preference().await?);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Go back to the fee service's transaction fee rate")]
pub(crate) struct UnsetTxFeeRateArgs {}
