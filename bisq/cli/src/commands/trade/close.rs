// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Cli handlers closing a completed trade

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct KeepFunds;

#[async_trait]
impl CommandLineHandler for KeepFunds {
    type Arguments = KeepFundsArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("keep funds with args: {:?}", arguments);

        let client = global.connect().await?;
        client.keep_funds(&arguments.trade_id).await?;
        log::info!("closed trade {}, funds kept in the wallet", arguments.trade_id);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Keep the trade proceeds in the daemon's wallet")]
pub(crate) struct KeepFundsArgs {
    #[arg(help = "The trade id")]
    pub trade_id: String,
}

pub(crate) struct WithdrawFunds;

#[async_trait]
impl CommandLineHandler for WithdrawFunds {
    type Arguments = WithdrawFundsArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("withdraw funds with args: {:?}", arguments);

        let client = global.connect().await?;
        client
            .withdraw_funds(&arguments.trade_id, &arguments.address, &arguments.memo)
            .await?;
        log::info!(
            "closed trade {}, funds sent to {}",
            arguments.trade_id,
            arguments.address
        );
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Send the trade proceeds to an external bitcoin address")]
pub(crate) struct WithdrawFundsArgs {
    #[arg(long, short, help = "The trade id")]
    pub trade_id: String,
    #[arg(long, short, help = "The receiving bitcoin address")]
    pub address: String,
    #[arg(long, short, default_value = "", help = "Memo stored with the transaction")]
    pub memo: String,
}
