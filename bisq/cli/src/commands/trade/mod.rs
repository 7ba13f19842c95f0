// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use clap::{Args, Subcommand};

use crate::commands::trade::close::{KeepFunds, KeepFundsArgs, WithdrawFunds, WithdrawFundsArgs};
use crate::commands::trade::confirm::{
    ConfirmPaymentReceived, ConfirmPaymentStarted, ConfirmPaymentArgs,
};
use crate::commands::trade::get::{GetTrade, GetTradeArgs};
use crate::commands::trade::statistics::{TradeStatistics, TradeStatisticsArgs};
use crate::commands::trade::take::{TakeOffer, TakeOfferArgs};
use crate::{CommandLineHandler, GlobalArguments};

mod close;
mod confirm;
mod get;
mod statistics;
mod take;

#[derive(Debug, Args)]
#[command(name = "trade", about = "trade protocol related commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct TradeCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl TradeCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Get(args) => GetTrade::handle(global, args).await,
            Commands::Take(args) => TakeOffer::handle(global, args).await,
            Commands::ConfirmStarted(args) => ConfirmPaymentStarted::handle(global, args).await,
            Commands::ConfirmReceived(args) => ConfirmPaymentReceived::handle(global, args).await,
            Commands::KeepFunds(args) => KeepFunds::handle(global, args).await,
            Commands::Withdraw(args) => WithdrawFunds::handle(global, args).await,
            Commands::Statistics(args) => TradeStatistics::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Get(GetTradeArgs),
    Take(TakeOfferArgs),
    ConfirmStarted(ConfirmPaymentArgs),
    ConfirmReceived(ConfirmPaymentArgs),
    KeepFunds(KeepFundsArgs),
    Withdraw(WithdrawFundsArgs),
    Statistics(TradeStatisticsArgs),
}
