// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Payment confirmation cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

/// Buyer side: the payment was sent.
pub(crate) struct ConfirmPaymentStarted;

#[async_trait]
impl CommandLineHandler for ConfirmPaymentStarted {
    type Arguments = ConfirmPaymentArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("confirm payment started with args: {:?}", arguments);

        let client = global.connect().await?;
        client.confirm_payment_started(&arguments.trade_id).await?;
        log::info!("confirmed payment started for trade {}", arguments.trade_id);
        Ok(())
    }
}

/// Seller side: the payment arrived.
pub(crate) struct ConfirmPaymentReceived;

#[async_trait]
impl CommandLineHandler for ConfirmPaymentReceived {
    type Arguments = ConfirmPaymentArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("confirm payment received with args: {:?}", arguments);

        let client = global.connect().await?;
        client.confirm_payment_received(&arguments.trade_id).await?;
        log::info!("confirmed payment received for trade {}", arguments.trade_id);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Confirm a step of the trade's payment")]
pub(crate) struct ConfirmPaymentArgs {
    #[arg(help = "The trade id")]
    pub trade_id: String,
}
