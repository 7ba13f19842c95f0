// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Send and transaction lookup cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct SendBsq;

#[async_trait]
impl CommandLineHandler for SendBsq {
    type Arguments = SendBsqArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("send bsq with args: {:?}", arguments);

        let client = global.connect().await?;
        let tx = client
            .send_bsq(
                &arguments.address,
                &arguments.amount,
                arguments.tx_fee_rate.as_deref().unwrap_or_default(),
            )
            .await?;
        log::info!("sent {} BSQ to {} in {}", arguments.amount, arguments.address, tx.tx_id);
        print_reply(&tx);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Send BSQ to an address")]
pub(crate) struct SendBsqArgs {
    #[arg(long, short, help = "The receiving BSQ address")]
    pub address: String,
    #[arg(long, help = "Amount of BSQ, e.g. 100.50")]
    pub amount: String,
    #[arg(long, help = "Fee rate in sats/byte, defaults to the daemon's rate")]
    pub tx_fee_rate: Option<String>,
}

pub(crate) struct SendBtc;

#[async_trait]
impl CommandLineHandler for SendBtc {
    type Arguments = SendBtcArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("send btc with args: {:?}", arguments);

        let client = global.connect().await?;
        let tx = client
            .send_btc(
                &arguments.address,
                &arguments.amount,
                arguments.tx_fee_rate.as_deref().unwrap_or_default(),
                &arguments.memo,
            )
            .await?;
        log::info!("sent {} BTC to {} in {}", arguments.amount, arguments.address, tx.tx_id);
        print_reply(&tx);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Send BTC to an address")]
pub(crate) struct SendBtcArgs {
    #[arg(long, short, help = "The receiving bitcoin address")]
    pub address: String,
    #[arg(long, help = "Amount of BTC, e.g. 0.005")]
    pub amount: String,
    #[arg(long, help = "Fee rate in sats/byte, defaults to the daemon's rate")]
    pub tx_fee_rate: Option<String>,
    #[arg(long, short, default_value = "", help = "Memo stored with the transaction")]
    pub memo: String,
}

pub(crate) struct GetTransaction;

#[async_trait]
impl CommandLineHandler for GetTransaction {
    type Arguments = GetTransactionArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get transaction with args: {:?}", arguments);

        let client = global.connect().await?;
        let tx = client.get_transaction(&arguments.tx_id).await?;
        print_reply(&tx);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print a wallet transaction")]
pub(crate) struct GetTransactionArgs {
    #[arg(help = "The transaction id")]
    pub tx_id: String,
}
