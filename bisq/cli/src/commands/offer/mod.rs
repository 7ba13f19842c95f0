// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use clap::{Args, Subcommand};

use crate::commands::offer::cancel::{CancelOffer, CancelOfferArgs};
use crate::commands::offer::create::{CreateOffer, CreateOfferArgs};
use crate::commands::offer::get::{GetMyOffer, GetOffer, GetOfferArgs};
use crate::commands::offer::list::{ListMyOffers, ListOffers, ListOffersArgs};
use crate::{CommandLineHandler, GlobalArguments};

mod cancel;
mod create;
mod get;
mod list;

#[derive(Debug, Args)]
#[command(name = "offer", about = "offer book related commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct OfferCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl OfferCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Get(args) => GetOffer::handle(global, args).await,
            Commands::GetMine(args) => GetMyOffer::handle(global, args).await,
            Commands::List(args) => ListOffers::handle(global, args).await,
            Commands::ListMine(args) => ListMyOffers::handle(global, args).await,
            Commands::Create(args) => CreateOffer::handle(global, args).await,
            Commands::Cancel(args) => CancelOffer::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Get(GetOfferArgs),
    GetMine(GetOfferArgs),
    List(ListOffersArgs),
    ListMine(ListOffersArgs),
    Create(CreateOfferArgs),
    Cancel(CancelOfferArgs),
}
