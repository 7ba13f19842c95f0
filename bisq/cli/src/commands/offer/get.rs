// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Get offer cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

/// Prints any offer in the offer book.
pub(crate) struct GetOffer;

#[async_trait]
impl CommandLineHandler for GetOffer {
    type Arguments = GetOfferArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get offer with args: {:?}", arguments);

        let client = global.connect().await?;
        let offer = client.get_offer(&arguments.id).await?;
        print_reply(&offer);
        Ok(())
    }
}

/// Prints one of our own offers.
pub(crate) struct GetMyOffer;

#[async_trait]
impl CommandLineHandler for GetMyOffer {
    type Arguments = GetOfferArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get my offer with args: {:?}", arguments);

        let client = global.connect().await?;
        let offer = client.get_my_offer(&arguments.id).await?;
        print_reply(&offer);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print an offer")]
pub(crate) struct GetOfferArgs {
    #[arg(help = "The offer id")]
    pub id: String,
}
