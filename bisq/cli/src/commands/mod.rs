// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! The module that contains all the CLI commands.

mod dispute;
mod offer;
mod payment;
mod price;
mod trade;
mod version;
mod wallet;

use std::fmt::Debug;

use clap::{Parser, Subcommand};

use crate::commands::dispute::DisputeAgentCommandsArgs;
use crate::commands::offer::OfferCommandsArgs;
use crate::commands::payment::PaymentCommandsArgs;
use crate::commands::price::{MarketPrice, MarketPriceArgs};
use crate::commands::trade::TradeCommandsArgs;
use crate::commands::version::{MethodHelp, MethodHelpArgs, Version, VersionArgs};
use crate::commands::wallet::WalletCommandsArgs;
use crate::{CommandLineHandler, GlobalArguments};

/// The collection of all subcommands to be called, see clap's documentation for usage. Register
/// a new command or command group accordingly.
#[derive(Debug, Subcommand)]
enum Commands {
    Version(VersionArgs),
    Help(MethodHelpArgs),
    Price(MarketPriceArgs),
    Offer(OfferCommandsArgs),
    Trade(TradeCommandsArgs),
    Payment(PaymentCommandsArgs),
    Wallet(WalletCommandsArgs),
    DisputeAgent(DisputeAgentCommandsArgs),
}

/// The overall command line struct to be used by `clap`.
#[derive(Debug, Parser)]
#[command(
    name = "bisq",
    about = "Command line client of the Bisq daemon",
    version = "v0.1.0"
)]
#[command(propagate_version = true, disable_help_subcommand = true)]
struct BisqCliCommands {
    #[command(flatten)]
    global_params: GlobalArguments,
    #[command(subcommand)]
    command: Commands,
}

/// The `cli` method exposed to handle all the cli commands, ideally from main.
pub async fn cli() {
    let args = BisqCliCommands::parse();
    let global = &args.global_params;

    let r = match &args.command {
        Commands::Version(args) => Version::handle(global, args).await,
        Commands::Help(args) => MethodHelp::handle(global, args).await,
        Commands::Price(args) => MarketPrice::handle(global, args).await,
        Commands::Offer(args) => args.handle(global).await,
        Commands::Trade(args) => args.handle(global).await,
        Commands::Payment(args) => args.handle(global).await,
        Commands::Wallet(args) => args.handle(global).await,
        Commands::DisputeAgent(args) => args.handle(global).await,
    };

    if let Err(e) = r {
        log::error!(
            "process command: {:?} failed due to error: {:?}",
            args.command,
            e
        );
        std::process::exit(1);
    }
}

/// Prints a daemon reply in its multi-line debug form.
pub(crate) fn print_reply<T: Debug>(reply: &T) {
    println!("{reply:#?}");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::BisqCliCommands;

    #[test]
    fn command_tree_is_consistent() {
        BisqCliCommands::command().debug_assert();
    }
}
