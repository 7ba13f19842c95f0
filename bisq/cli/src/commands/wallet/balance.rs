// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Wallet balance and address cli handlers

use std::fmt::Debug;

use async_trait::async_trait;
use clap::Args;

use crate::commands::print_reply;
use crate::{CommandLineHandler, GlobalArguments};

pub(crate) struct Balances;

#[async_trait]
impl CommandLineHandler for Balances {
    type Arguments = BalancesArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get balances with args: {:?}", arguments);

        let client = global.connect().await?;
        let currency_code = arguments.currency_code.as_deref().unwrap_or_default();
        let balances = client.get_balances(currency_code).await?;
        print_reply(&balances);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the wallet balances")]
pub(crate) struct BalancesArgs {
    #[arg(long, short, help = "Only this wallet, BTC or BSQ")]
    pub currency_code: Option<String>,
}

pub(crate) struct AddressBalance;

#[async_trait]
impl CommandLineHandler for AddressBalance {
    type Arguments = AddressBalanceArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get address balance with args: {:?}", arguments);

        let client = global.connect().await?;
        let info = client.get_address_balance(&arguments.address).await?;
        print_reply(&info);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print the balance of a wallet address")]
pub(crate) struct AddressBalanceArgs {
    #[arg(help = "A bitcoin address of the wallet")]
    pub address: String,
}

pub(crate) struct UnusedBsqAddress;

#[async_trait]
impl CommandLineHandler for UnusedBsqAddress {
    type Arguments = UnusedBsqAddressArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get unused bsq address with args: {:?}", arguments);

        let client = global.connect().await?;
        println!("{}", client.get_unused_bsq_address().await?);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Print an unused BSQ receiving address")]
pub(crate) struct UnusedBsqAddressArgs {}

pub(crate) struct FundingAddresses;

#[async_trait]
impl CommandLineHandler for FundingAddresses {
    type Arguments = FundingAddressesArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get funding addresses with args: {:?}", arguments);

        let client = global.connect().await?;
        let mut addresses = client.get_funding_addresses().await?;
        if arguments.unused {
            addresses.retain(|a| a.is_address_unused);
        }
        print_reply(&addresses);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "List the BTC receiving addresses of the wallet")]
pub(crate) struct FundingAddressesArgs {
    #[arg(long, help = "Only addresses that never received funds")]
    pub unused: bool,
}
