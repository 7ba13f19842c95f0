// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use clap::{Args, Subcommand};

use crate::commands::wallet::balance::{
    AddressBalance, AddressBalanceArgs, Balances, BalancesArgs, FundingAddresses,
    FundingAddressesArgs, UnusedBsqAddress, UnusedBsqAddressArgs,
};
use crate::commands::wallet::fee::{
    SetTxFeeRate, SetTxFeeRateArgs, TxFeeRate, TxFeeRateArgs, UnsetTxFeeRate, UnsetTxFeeRateArgs,
};
use crate::commands::wallet::password::{
    LockWallet, LockWalletArgs, RemoveWalletPassword, RemoveWalletPasswordArgs,
    SetWalletPassword, SetWalletPasswordArgs, UnlockWallet, UnlockWalletArgs,
};
use crate::commands::wallet::send::{
    GetTransaction, GetTransactionArgs, SendBsq, SendBsqArgs, SendBtc, SendBtcArgs,
};
use crate::{CommandLineHandler, GlobalArguments};

mod balance;
mod fee;
mod password;
mod send;

#[derive(Debug, Args)]
#[command(name = "wallet", about = "wallet related commands")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct WalletCommandsArgs {
    #[command(subcommand)]
    command: Commands,
}

impl WalletCommandsArgs {
    pub async fn handle(&self, global: &GlobalArguments) -> anyhow::Result<()> {
        match &self.command {
            Commands::Balances(args) => Balances::handle(global, args).await,
            Commands::AddressBalance(args) => AddressBalance::handle(global, args).await,
            Commands::BsqAddress(args) => UnusedBsqAddress::handle(global, args).await,
            Commands::FundingAddresses(args) => FundingAddresses::handle(global, args).await,
            Commands::SendBsq(args) => SendBsq::handle(global, args).await,
            Commands::SendBtc(args) => SendBtc::handle(global, args).await,
            Commands::Tx(args) => GetTransaction::handle(global, args).await,
            Commands::FeeRate(args) => TxFeeRate::handle(global, args).await,
            Commands::SetFeeRate(args) => SetTxFeeRate::handle(global, args).await,
            Commands::UnsetFeeRate(args) => UnsetTxFeeRate::handle(global, args).await,
            Commands::SetPassword(args) => SetWalletPassword::handle(global, args).await,
            Commands::RemovePassword(args) => RemoveWalletPassword::handle(global, args).await,
            Commands::Lock(args) => LockWallet::handle(global, args).await,
            Commands::Unlock(args) => UnlockWallet::handle(global, args).await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Balances(BalancesArgs),
    AddressBalance(AddressBalanceArgs),
    BsqAddress(UnusedBsqAddressArgs),
    FundingAddresses(FundingAddressesArgs),
    SendBsq(SendBsqArgs),
    SendBtc(SendBtcArgs),
    Tx(GetTransactionArgs),
    FeeRate(TxFeeRateArgs),
    SetFeeRate(SetTxFeeRateArgs),
    UnsetFeeRate(UnsetTxFeeRateArgs),
    SetPassword(SetWalletPasswordArgs),
    RemovePassword(RemoveWalletPasswordArgs),
    Lock(LockWalletArgs),
    Unlock(UnlockWalletArgs),
}
