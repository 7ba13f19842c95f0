// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! List offers cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use bisq_sdk::OfferDirection;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct ListOffers;

#[async_trait]
impl CommandLineHandler for ListOffers {
    type Arguments = ListOffersArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("list offers with args: {:?}", arguments);

        let client = global.connect().await?;
        let offers = client
            .get_offers(arguments.direction, &arguments.currency_code)
            .await?;
        log::info!("found {} offers", offers.len());
        print_reply(&offers);
        Ok(())
    }
}

pub(crate) struct ListMyOffers;

#[async_trait]
impl CommandLineHandler for ListMyOffers {
    type Arguments = ListOffersArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("list my offers with args: {:?}", arguments);

        let client = global.connect().await?;
        let offers = client
            .get_my_offers(arguments.direction, &arguments.currency_code)
            .await?;
        log::info!("found {} offers", offers.len());
        print_reply(&offers);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "List the offers of a market")]
pub(crate) struct ListOffersArgs {
    #[arg(long, short, help = "Offer direction, buy or sell")]
    pub direction: OfferDirection,
    #[arg(long, short, help = "Counter currency code, e.g. EUR")]
    pub currency_code: String,
}
