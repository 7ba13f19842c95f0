// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Cancel offer cli handler

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct CancelOffer;

#[async_trait]
impl CommandLineHandler for CancelOffer {
    type Arguments = CancelOfferArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("cancel offer with args: {:?}", arguments);

        let client = global.connect().await?;
        client.cancel_offer(&arguments.id).await?;
        log::info!("cancelled offer {}", arguments.id);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Remove one of your offers from the offer book")]
pub(crate) struct CancelOfferArgs {
    #[arg(help = "The offer id")]
    pub id: String,
}
