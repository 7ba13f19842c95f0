// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Take offer cli handler

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

/// Takes an offer, starting a trade with its maker.
pub(crate) struct TakeOffer;

#[async_trait]
impl CommandLineHandler for TakeOffer {
    type Arguments = TakeOfferArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("take offer with args: {:?}", arguments);

        let client = global.connect().await?;
        let trade = client
            .take_offer(
                &arguments.offer_id,
                &arguments.payment_account_id,
                &arguments.taker_fee_currency_code,
            )
            .await?;
        log::info!("started trade {}", trade.trade_id);
        print_reply(&trade);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Take an offer")]
pub(crate) struct TakeOfferArgs {
    #[arg(long, short, help = "The offer to take")]
    pub offer_id: String,
    #[arg(long, short, help = "The payment account used for the trade")]
    pub payment_account_id: String,
    #[arg(
        long,
        default_value = "BTC",
        help = "Currency of the taker fee, BTC or BSQ"
    )]
    pub taker_fee_currency_code: String,
}
