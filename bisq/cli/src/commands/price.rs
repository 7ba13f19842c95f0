// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Market price cli handler.

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct MarketPrice;

#[async_trait]
impl CommandLineHandler for MarketPrice {
    type Arguments = MarketPriceArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get market price with args: {:?}", arguments);

        let client = global.connect().await?;
        let price = client.get_market_price(&arguments.currency_code).await?;
        println!("{price}");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the market price of bitcoin in a currency")]
pub(crate) struct MarketPriceArgs {
    #[arg(help = "Currency code, e.g. EUR or XMR")]
    pub currency_code: String,
}
